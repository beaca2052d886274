//! Duration Filter — drop free windows too short to host the meeting.

use chrono::Duration;

use crate::types::FreeWindow;

/// Keep windows where `start + min_len` does not pass `end`. Preserves
/// order. A zero minimum keeps everything, zero-length windows included.
pub fn crop_to_min_len(windows: Vec<FreeWindow>, min_len_minutes: i64) -> Vec<FreeWindow> {
    let min_len = Duration::minutes(min_len_minutes);
    windows
        .into_iter()
        .filter(|w| w.start + min_len <= w.end)
        .collect()
}
