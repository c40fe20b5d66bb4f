//! Core error types for dayblock-core.
//!
//! The scoring and scheduling algorithms are total over arbitrary input
//! (clamping and defaulting instead of rejecting), so errors only arise at
//! constructor boundaries and when parsing caller-supplied JSON.

use thiserror::Error;

/// Core error type for dayblock-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Invalid time range
    #[error("Invalid time range: end_time ({end}) must be greater than start_time ({start})")]
    InvalidTimeRange {
        start: chrono::DateTime<chrono::Utc>,
        end: chrono::DateTime<chrono::Utc>,
    },

    /// Invalid hour-of-day range
    #[error("Invalid hour range: {start_hour}-{end_hour}")]
    InvalidHourRange { start_hour: u32, end_hour: u32 },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
