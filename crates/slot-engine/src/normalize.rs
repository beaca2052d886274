//! Interval Normalizer — fold the daily availability window into the busy
//! list as synthetic "night" blocks.
//!
//! Turning the out-of-window hours into ordinary busy intervals lets the
//! merger and gap extractor reason about a single kind of object instead
//! of two.

use chrono::{DateTime, Duration, Utc};

use crate::types::{DailyWindow, DayRange, LabeledInterval};

/// Label carried by synthetic night blocks. Display-only; downstream logic
/// never looks at it.
pub const NIGHT_LABEL: &str = "Not available";

/// Append one synthetic busy block per day: the period from that day's
/// close time until the next day's open time.
///
/// A block for the day *before* the range comes first, covering the case
/// where the night already in progress blocks the early hours of day one.
/// Blocks are appended in day order after the existing events; the caller
/// sorts before merging.
pub fn add_night_blocks(events: &mut Vec<LabeledInterval>, window: &DailyWindow, range: &DayRange) {
    let night = window.night_duration();
    let close = window.close_offset();

    let prev_day = range.first() - Duration::days(1);
    events.push(night_block(prev_day + close, night));
    for &day in range.days() {
        events.push(night_block(day + close, night));
    }
}

fn night_block(start: DateTime<Utc>, night: Duration) -> LabeledInterval {
    LabeledInterval::new(NIGHT_LABEL, start, start + night)
}
