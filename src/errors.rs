//! Input validation errors shared by the scheduling algorithms

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors raised when a caller violates an input contract.
///
/// None of the scheduling computations can fail for any other reason, so this
/// is the only error the pure algorithms return. A missing result (no free
/// slot, no difficulty change) is never reported through this type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    #[error("Quality rating must be between 0 and 5, got {0}")]
    QualityOutOfRange(i32),

    #[error("Review rating must be between 1 and 4, got {0}")]
    RatingOutOfRange(i32),

    #[error("Difficulty level must be 1, 2 or 3, got {0}")]
    DifficultyOutOfRange(i32),

    #[error("Duration must be positive")]
    NonPositiveDuration,

    #[error("Interval must end after it starts ({start} >= {end})")]
    EmptyInterval {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("Hour of day must be between 0 and 23, got {0}")]
    HourOutOfRange(u32),

    #[error("Active hours start ({start}) is after end ({end})")]
    InvertedActiveHours { start: u32, end: u32 },

    #[error("Streak lookback must be at least one day")]
    ZeroLookback,

    #[error("Timestamp arithmetic out of range")]
    TimestampOutOfRange,
}

impl From<InvalidInput> for String {
    fn from(err: InvalidInput) -> Self {
        err.to_string()
    }
}

/// Result type alias for the scheduling algorithms
pub type Result<T> = std::result::Result<T, InvalidInput>;
