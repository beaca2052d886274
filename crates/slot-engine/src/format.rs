//! Display formatting for free windows.
//!
//! Renders lines like `"Mon, Mar 16, 9:00 am to 5:00 pm."`. Conversion
//! into the viewer's timezone happens here, at the edge — the windows
//! themselves stay in UTC.

use chrono_tz::Tz;

use crate::types::FreeWindow;

const DAY_AND_TIME: &str = "%a, %b %-d, %-I:%M %P";
const TIME_ONLY: &str = "%-I:%M %P";

/// One window as `"Mon, Mar 16, 9:00 am to 5:00 pm."`. The close repeats
/// its day when the window crosses into another day.
pub fn format_window(window: &FreeWindow, tz: Tz) -> String {
    let start = window.start.with_timezone(&tz);
    let end = window.end.with_timezone(&tz);
    if start.date_naive() == end.date_naive() {
        format!("{} to {}.", start.format(DAY_AND_TIME), end.format(TIME_ONLY))
    } else {
        format!("{} to {}.", start.format(DAY_AND_TIME), end.format(DAY_AND_TIME))
    }
}

pub fn format_windows(windows: &[FreeWindow], tz: Tz) -> Vec<String> {
    windows.iter().map(|w| format_window(w, tz)).collect()
}
