// --- File: crates/bookcal_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type for the booking calendar crates.
///
/// Calendar computations themselves never fail: degraded conditions (no bookable
/// date, out-of-window lookups) fall back to safe values. This enum covers the
/// edges where input enters the system: configuration and constraint validation.
#[derive(Error, Debug)]
pub enum CalendarError {
    /// Booking constraints that cannot describe a booking window
    #[error("Invalid booking constraints: {0}")]
    InvalidConstraints(String),

    /// Timezone name not known to the tz database
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    /// Week strip tunables outside their accepted range
    #[error("Invalid week strip settings: {0}")]
    InvalidSettings(String),

    /// Error occurred while loading or deserializing configuration
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Date arithmetic left the range chrono can represent
    #[error("Date out of range: {0}")]
    DateOutOfRange(String),
}

// Utility functions for error handling
pub fn invalid_constraints<T: fmt::Display>(message: T) -> CalendarError {
    CalendarError::InvalidConstraints(message.to_string())
}

pub fn invalid_timezone<T: fmt::Display>(message: T) -> CalendarError {
    CalendarError::InvalidTimezone(message.to_string())
}

pub fn invalid_settings<T: fmt::Display>(message: T) -> CalendarError {
    CalendarError::InvalidSettings(message.to_string())
}

pub fn date_out_of_range<T: fmt::Display>(message: T) -> CalendarError {
    CalendarError::DateOutOfRange(message.to_string())
}
