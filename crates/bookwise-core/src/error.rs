//! Error types for bookwise operations.

use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum BookingError {
    /// A booking's interval is malformed (`start >= end`). Raised for the
    /// proposal being checked as well as for any existing booking that
    /// violates the invariant -- bad data is surfaced, never skipped.
    #[error("Invalid time range: start {start} is not before end {end}")]
    InvalidRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    /// A timestamp string could not be parsed as RFC 3339.
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// A store operation referenced a booking id that does not exist.
    #[error("No booking with id {0}")]
    NotFound(Uuid),

    /// A store create carried an id that is already present.
    #[error("Booking id {0} already exists")]
    DuplicateId(Uuid),
}

pub type Result<T> = std::result::Result<T, BookingError>;
