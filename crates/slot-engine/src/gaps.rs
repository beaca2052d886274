//! Gap Extractor — the free windows are the spaces between merged busy
//! blocks, clipped at the day-range boundaries.

use crate::types::{DayRange, FreeWindow, PlainInterval};

/// Walk merged busy blocks against the day-range boundaries and emit the
/// complementary free windows.
///
/// `busy` must be merger output: sorted, disjoint. The boundary handling:
///
/// - blocks that end at or before the range start are spent — skipped;
/// - a block straddling the range start opens free time at its end;
/// - otherwise free time opens at the range start itself;
/// - after the last block, a trailing window runs to the end marker unless
///   free time already opened at or past it.
///
/// Gaps *between* blocks are emitted as-is, so busy blocks extending past
/// the end marker can yield windows beyond it; only the trailing window is
/// clamped. Zero-length windows are possible (a block starting exactly at
/// the range start) and are left for the duration filter to judge.
///
/// An empty `busy` slice yields the whole range as a single window.
pub fn free_between(busy: &[PlainInterval], range: &DayRange) -> Vec<FreeWindow> {
    let range_start = range.first();
    let range_end = range.end_marker();

    if busy.is_empty() {
        return vec![FreeWindow::new(range_start, range_end)];
    }

    // Skip blocks entirely spent before the range opens.
    let mut idx = 0;
    while idx < busy.len() && busy[idx].end <= range_start {
        idx += 1;
    }

    // Decide where the first free window opens.
    let mut free_open = match busy.get(idx) {
        Some(block) if block.start < range_start => {
            // The block straddles the range start; free time begins when
            // it ends.
            idx += 1;
            block.end
        }
        _ => range_start,
    };

    let mut free = Vec::new();
    for block in &busy[idx..] {
        free.push(FreeWindow::new(free_open, block.start));
        free_open = block.end;
    }

    if free_open < range_end {
        free.push(FreeWindow::new(free_open, range_end));
    }

    free
}
