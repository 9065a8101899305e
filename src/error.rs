//! Error types for the Hotel Operations Engine.
//!
//! The capacity and payroll computations themselves are total functions and
//! never fail. Errors only arise at the boundaries: loading configuration,
//! validating inbound records, and reading or writing the backing store.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Hotel Operations Engine.
///
/// # Example
///
/// ```
/// use hotel_ops_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/hotel.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/hotel.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No PAYE schedule is effective on the requested pay date.
    #[error("No tax schedule effective on {date}")]
    TaxScheduleNotFound {
        /// The pay date that was looked up.
        date: NaiveDate,
    },

    /// A date range whose end precedes its start.
    #[error("Invalid date range: end {end} is before start {start}")]
    InvalidDateRange {
        /// The start of the range.
        start: NaiveDate,
        /// The end of the range.
        end: NaiveDate,
    },

    /// A forecast window longer than the service accepts.
    #[error("Forecast window of {days} days exceeds the maximum of {max} days")]
    ForecastWindowTooLarge {
        /// The number of days requested.
        days: i64,
        /// The maximum number of days accepted.
        max: i64,
    },

    /// A booking was invalid or contained inconsistent data.
    #[error("Invalid booking '{booking_id}': {message}")]
    InvalidBooking {
        /// The ID of the invalid booking.
        booking_id: String,
        /// A description of what made the booking invalid.
        message: String,
    },

    /// A staff record was invalid or contained inconsistent data.
    #[error("Invalid staff field '{field}': {message}")]
    InvalidStaff {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Reading or writing the backing store failed.
    #[error("Storage error at '{path}': {message}")]
    Storage {
        /// The store location.
        path: String,
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
