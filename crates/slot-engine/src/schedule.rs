//! The two public computation entry points.
//!
//! Live calendar events get night-blocked, merged, gapped, and filtered,
//! and additionally produce the anonymized busy list for storage. Busy
//! pairs already accumulated in storage skip night-blocking entirely —
//! the stored pairs are the only constraint applied on that path.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::filter::crop_to_min_len;
use crate::gaps::free_between;
use crate::merge::merge_intervals;
use crate::normalize::add_night_blocks;
use crate::types::{DailyWindow, DayRange, FreeWindow, LabeledInterval, PlainInterval};

/// Free windows plus the anonymized merged busy list ready for storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventAvailability {
    pub free: Vec<FreeWindow>,
    /// Merged busy blocks with labels stripped — the form the persistence
    /// layer appends to a meeting record.
    pub storable_busy: Vec<PlainInterval>,
}

/// Compute shared free windows from live calendar events.
///
/// Stages: night-blocking, sort, merge, gap extraction, duration filter.
/// The input slice is never mutated; night blocks are added to a local
/// copy. The merger always has input here because the normalizer produces
/// at least one block per day.
pub fn free_windows_from_events(
    events: &[LabeledInterval],
    window: &DailyWindow,
    range: &DayRange,
    min_len_minutes: i64,
) -> Result<EventAvailability> {
    let mut local: Vec<LabeledInterval> = events.to_vec();
    add_night_blocks(&mut local, window, range);

    let mut plain: Vec<PlainInterval> = local.iter().map(PlainInterval::from).collect();
    plain.sort();

    let merged = merge_intervals(&plain)?;
    let free = crop_to_min_len(free_between(&merged, range), min_len_minutes);

    Ok(EventAvailability {
        free,
        storable_busy: merged,
    })
}

/// Compute shared free windows from busy pairs accumulated in storage.
///
/// No night-blocking happens on this path — stored pairs already reflect
/// every constraint a participant submitted. With nothing stored yet, the
/// whole range is one candidate window (guarding the merger, which rejects
/// empty input).
pub fn free_windows_from_stored(
    stored: &[PlainInterval],
    range: &DayRange,
    min_len_minutes: i64,
) -> Result<Vec<FreeWindow>> {
    if stored.is_empty() {
        return Ok(crop_to_min_len(free_between(&[], range), min_len_minutes));
    }

    let mut local = stored.to_vec();
    local.sort();

    let merged = merge_intervals(&local)?;
    Ok(crop_to_min_len(free_between(&merged, range), min_len_minutes))
}
