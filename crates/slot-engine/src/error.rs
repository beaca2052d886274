//! Error types for slot-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    /// The merger was handed zero intervals. Callers must guard: the event
    /// path always carries night blocks, the stored path short-circuits.
    #[error("no busy intervals to merge")]
    EmptyInput,

    #[error("invalid daily window: {0}")]
    InvalidWindow(String),

    /// A timestamp or clock time failed to parse. `field` names the
    /// offending input.
    #[error("malformed instant in {field}: {value}")]
    MalformedInstant { field: String, value: String },

    #[error("invalid day range: {0}")]
    InvalidDayRange(String),
}

pub type Result<T> = std::result::Result<T, SlotError>;
