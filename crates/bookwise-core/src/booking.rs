//! The booking model -- a group-scoped, half-open time interval.
//!
//! A booking occupies `[start, end)`: the end instant is excluded, so two
//! bookings that touch back-to-back do not overlap. Timestamps are typed
//! `DateTime<Utc>` values; string input is parsed once at the boundary
//! rather than compared lexicographically.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{BookingError, Result};

/// A reserved (or proposed) time interval for a resource group.
///
/// `id` is `None` for a proposal that has not been persisted yet; the store
/// assigns one on create and returns the canonical record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// Resource group (e.g., a room). Bookings in different groups never
    /// conflict.
    pub group_id: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(default)]
    pub title: String,
    /// Display color. Non-semantic for conflict purposes; see
    /// [`crate::palette::GroupPalette`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Booking {
    /// Build a validated booking proposal (no id yet).
    ///
    /// # Errors
    /// Returns `BookingError::InvalidRange` unless `start < end`.
    pub fn new(
        group_id: impl Into<String>,
        title: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Self> {
        let booking = Booking {
            id: None,
            group_id: group_id.into(),
            start,
            end,
            title: title.into(),
            color: None,
        };
        booking.validate()?;
        Ok(booking)
    }

    /// Build a validated booking proposal from RFC 3339 timestamp strings.
    ///
    /// # Errors
    /// Returns `BookingError::InvalidTimestamp` if either string fails to
    /// parse, and `BookingError::InvalidRange` unless `start < end`.
    pub fn from_rfc3339(
        group_id: impl Into<String>,
        title: impl Into<String>,
        start: &str,
        end: &str,
    ) -> Result<Self> {
        Self::new(group_id, title, parse_rfc3339(start)?, parse_rfc3339(end)?)
    }

    /// Check the interval invariant `start < end`.
    ///
    /// # Errors
    /// Returns `BookingError::InvalidRange` when violated.
    pub fn validate(&self) -> Result<()> {
        if self.start < self.end {
            Ok(())
        } else {
            Err(BookingError::InvalidRange {
                start: self.start,
                end: self.end,
            })
        }
    }

    /// Interval duration in whole minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// Parse an RFC 3339 timestamp into `DateTime<Utc>`.
pub fn parse_rfc3339(s: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| BookingError::InvalidTimestamp(s.to_string()))
}
