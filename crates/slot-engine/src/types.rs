//! Interval, window, and day-range types.
//!
//! The engine compares instants (`DateTime<Utc>`) only — callers resolve
//! wall-clock input to UTC before anything reaches the algorithms. Live
//! calendar events carry a summary ([`LabeledInterval`]); everything merged
//! or persisted is an anonymous [`PlainInterval`].

use chrono::offset::LocalResult;
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};

/// A busy period sourced from a live calendar, tagged with the event name.
///
/// The label exists for display only and never survives into storage —
/// see [`PlainInterval`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledInterval {
    pub summary: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl LabeledInterval {
    pub fn new(summary: impl Into<String>, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            summary: summary.into(),
            start,
            end,
        }
    }
}

/// An anonymized busy pair — the canonical form accumulated in storage
/// across participants.
///
/// Ordered by `(start, end)`, which is exactly the order the merger needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlainInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl PlainInterval {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// The `(start_iso, end_iso)` pair the persistence layer appends to a
    /// meeting record.
    pub fn to_rfc3339_pair(&self) -> (String, String) {
        (self.start.to_rfc3339(), self.end.to_rfc3339())
    }
}

impl From<&LabeledInterval> for PlainInterval {
    fn from(labeled: &LabeledInterval) -> Self {
        Self {
            start: labeled.start,
            end: labeled.end,
        }
    }
}

/// A computed window of shared free time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FreeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub duration_minutes: i64,
}

impl FreeWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start,
            end,
            duration_minutes: (end - start).num_minutes(),
        }
    }
}

/// The portion of each calendar day eligible for scheduling,
/// e.g. 09:00–17:00.
///
/// The constructor enforces close strictly after open, so the nightly
/// out-of-window period is always positive and at most 24 hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyWindow {
    open_hour: u32,
    open_minute: u32,
    close_hour: u32,
    close_minute: u32,
}

impl DailyWindow {
    pub fn new(open_hour: u32, open_minute: u32, close_hour: u32, close_minute: u32) -> Result<Self> {
        if open_hour > 23 || close_hour > 23 || open_minute > 59 || close_minute > 59 {
            return Err(SlotError::InvalidWindow(format!(
                "hours must be 0-23 and minutes 0-59, got {:02}:{:02}..{:02}:{:02}",
                open_hour, open_minute, close_hour, close_minute
            )));
        }
        if close_hour * 60 + close_minute <= open_hour * 60 + open_minute {
            return Err(SlotError::InvalidWindow(format!(
                "close {:02}:{:02} is not after open {:02}:{:02}",
                close_hour, close_minute, open_hour, open_minute
            )));
        }
        Ok(Self {
            open_hour,
            open_minute,
            close_hour,
            close_minute,
        })
    }

    /// Offset of the opening time from midnight.
    pub fn open_offset(&self) -> Duration {
        Duration::minutes((self.open_hour * 60 + self.open_minute) as i64)
    }

    /// Offset of the closing time from midnight.
    pub fn close_offset(&self) -> Duration {
        Duration::minutes((self.close_hour * 60 + self.close_minute) as i64)
    }

    /// Length of the nightly out-of-window period: close time through the
    /// next day's open time. Always in `(0, 24h]`.
    pub fn night_duration(&self) -> Duration {
        Duration::hours(24) - (self.close_offset() - self.open_offset())
    }
}

/// The ordered sequence of local midnights bounding the days under
/// consideration. The final entry marks the end boundary used to clamp the
/// trailing free window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRange(Vec<DateTime<Utc>>);

impl DayRange {
    /// Build from pre-resolved midnight instants. Must be non-empty and
    /// strictly ascending.
    pub fn from_midnights(days: Vec<DateTime<Utc>>) -> Result<Self> {
        if days.is_empty() {
            return Err(SlotError::InvalidDayRange(
                "day range must contain at least one day boundary".to_string(),
            ));
        }
        if days.windows(2).any(|w| w[0] >= w[1]) {
            return Err(SlotError::InvalidDayRange(
                "day boundaries are not strictly ascending".to_string(),
            ));
        }
        Ok(Self(days))
    }

    /// Consecutive local midnights for `first..=last` in an IANA timezone.
    ///
    /// Ambiguous midnights (clocks fall back across midnight) resolve to
    /// the earlier offset; zones whose clocks spring forward over midnight
    /// start that day at 01:00 instead.
    pub fn consecutive(first: NaiveDate, last: NaiveDate, tz: Tz) -> Result<Self> {
        if last < first {
            return Err(SlotError::InvalidDayRange(format!(
                "range ends before it starts: {} - {}",
                first, last
            )));
        }
        let mut days = Vec::new();
        let mut day = first;
        while day <= last {
            days.push(local_midnight(tz, day)?);
            match day.succ_opt() {
                Some(next) => day = next,
                None => break,
            }
        }
        Self::from_midnights(days)
    }

    pub fn first(&self) -> DateTime<Utc> {
        self.0[0]
    }

    /// The end boundary: midnight after the last day in the range.
    pub fn end_marker(&self) -> DateTime<Utc> {
        self.0[self.0.len() - 1]
    }

    pub fn days(&self) -> &[DateTime<Utc>] {
        &self.0
    }
}

/// Resolve a local midnight to UTC, handling DST transitions that land on it.
fn local_midnight(tz: Tz, day: NaiveDate) -> Result<DateTime<Utc>> {
    let midnight = day.and_time(NaiveTime::MIN);
    match tz.from_local_datetime(&midnight) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => Ok(dt.with_timezone(&Utc)),
        LocalResult::None => {
            // Midnight was skipped by a spring-forward jump; the day starts
            // an hour later.
            tz.from_local_datetime(&(midnight + Duration::hours(1)))
                .earliest()
                .map(|dt| dt.with_timezone(&Utc))
                .ok_or_else(|| {
                    SlotError::InvalidDayRange(format!("cannot resolve midnight of {} in {}", day, tz))
                })
        }
    }
}
