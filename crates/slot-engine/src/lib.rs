//! # slot-engine
//!
//! Free-time computation for group meeting scheduling.
//!
//! Given everyone's busy intervals — fresh calendar events or busy pairs
//! accumulated in storage — plus a daily availability window and a range
//! of days, the engine computes the windows in which everyone is
//! simultaneously free for at least a requested duration. It also produces
//! the anonymized busy list a persistence layer accumulates across
//! participants.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use slot_engine::{free_windows_from_events, DailyWindow, DayRange, LabeledInterval};
//!
//! let range = DayRange::from_midnights(vec![
//!     Utc.with_ymd_and_hms(2026, 3, 16, 0, 0, 0).unwrap(),
//!     Utc.with_ymd_and_hms(2026, 3, 17, 0, 0, 0).unwrap(),
//! ])
//! .unwrap();
//! let window = DailyWindow::new(9, 0, 17, 0).unwrap();
//! let events = vec![LabeledInterval::new(
//!     "Standup",
//!     Utc.with_ymd_and_hms(2026, 3, 16, 10, 0, 0).unwrap(),
//!     Utc.with_ymd_and_hms(2026, 3, 16, 10, 30, 0).unwrap(),
//! )];
//!
//! let result = free_windows_from_events(&events, &window, &range, 30).unwrap();
//! // First shared window: 09:00–10:00 on March 16.
//! assert_eq!(result.free[0].duration_minutes, 60);
//! ```
//!
//! ## Modules
//!
//! - [`types`] — intervals, daily windows, day ranges
//! - [`normalize`] — fold the daily window into synthetic busy blocks
//! - [`merge`] — collapse sorted intervals into disjoint busy blocks
//! - [`gaps`] — extract free windows between busy blocks
//! - [`filter`] — minimum-duration filtering
//! - [`schedule`] — the two public computation entry points
//! - [`meeting`] — per-meeting aggregate record and meeting codes
//! - [`parse`] / [`format`] — boundary input parsing and display output
//! - [`error`] — error types

pub mod error;
pub mod filter;
pub mod format;
pub mod gaps;
pub mod meeting;
pub mod merge;
pub mod normalize;
pub mod parse;
pub mod schedule;
pub mod types;

pub use error::{Result, SlotError};
pub use meeting::Meeting;
pub use schedule::{free_windows_from_events, free_windows_from_stored, EventAvailability};
pub use types::{DailyWindow, DayRange, FreeWindow, LabeledInterval, PlainInterval};
