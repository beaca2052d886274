//! Merger — collapse a start-sorted interval list into maximal disjoint
//! busy blocks.

use crate::error::{Result, SlotError};
use crate::types::PlainInterval;

/// Merge overlapping and exactly abutting intervals.
///
/// The input must already be sorted ascending by start. The output is
/// strictly ordered by start, with consecutive blocks separated by a
/// positive gap. Intervals that touch (`next.start == current.end`) merge
/// into one block.
///
/// # Errors
/// Returns [`SlotError::EmptyInput`] for an empty slice.
pub fn merge_intervals(sorted: &[PlainInterval]) -> Result<Vec<PlainInterval>> {
    if sorted.is_empty() {
        return Err(SlotError::EmptyInput);
    }

    let mut merged: Vec<PlainInterval> = Vec::new();
    for iv in sorted {
        if let Some(last) = merged.last_mut() {
            if iv.start <= last.end {
                // Touching or overlapping — extend the running block.
                last.end = last.end.max(iv.end);
                continue;
            }
        }
        merged.push(*iv);
    }

    Ok(merged)
}
