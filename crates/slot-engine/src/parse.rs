//! Human input parsing — dates, date ranges, and daily clock times.
//!
//! The computation core never parses free text; these helpers sit at the
//! boundary, turning form input into the typed values the core consumes.

use chrono::{NaiveDate, NaiveTime, Timelike};

use crate::error::{Result, SlotError};

/// Accepted clock-time formats, tried in order: 24-hour (`13:30`), then
/// 12-hour with meridiem (`1:30pm`, `1:30 pm`, `1pm`).
const TIME_FORMATS: &[&str] = &["%H:%M", "%I:%M%p", "%I:%M %p", "%I%p"];

/// Parse a `MM/DD/YYYY` date. `field` names the input in the error.
pub fn parse_date(field: &str, text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%m/%d/%Y").map_err(|_| SlotError::MalformedInstant {
        field: field.to_string(),
        value: text.trim().to_string(),
    })
}

/// Parse a `"MM/DD/YYYY - MM/DD/YYYY"` range, inclusive on both ends.
pub fn parse_date_range(text: &str) -> Result<(NaiveDate, NaiveDate)> {
    let (first, last) = text.split_once('-').ok_or_else(|| SlotError::MalformedInstant {
        field: "date range".to_string(),
        value: text.to_string(),
    })?;
    let first = parse_date("range start", first)?;
    let last = parse_date("range end", last)?;
    if last < first {
        return Err(SlotError::InvalidDayRange(format!(
            "range ends before it starts: {}",
            text.trim()
        )));
    }
    Ok((first, last))
}

/// Parse a daily clock time into `(hour, minute)`.
pub fn parse_clock_time(field: &str, text: &str) -> Result<(u32, u32)> {
    let trimmed = text.trim();
    for fmt in TIME_FORMATS {
        if let Ok(t) = NaiveTime::parse_from_str(trimmed, fmt) {
            return Ok((t.hour(), t.minute()));
        }
    }
    Err(SlotError::MalformedInstant {
        field: field.to_string(),
        value: trimmed.to_string(),
    })
}
