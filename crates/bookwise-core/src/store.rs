//! In-memory booking store -- the persistence collaborator.
//!
//! Stands in for a backend keyed by booking id: create assigns the id and
//! returns the canonical record, update/delete address an existing id.
//! Listings are sorted by `(group_id, start)` so output is deterministic
//! regardless of insertion order.
//!
//! The store does not run the conflict check itself; checking a proposal via
//! [`crate::conflict`] is the caller's explicit step before mutating.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::booking::Booking;
use crate::error::{BookingError, Result};

/// Bookings keyed by id.
#[derive(Debug, Clone, Default)]
pub struct BookingStore {
    bookings: HashMap<Uuid, Booking>,
}

impl BookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store from existing records (e.g., a decoded JSON file).
    ///
    /// Records without an id are assigned one, as in [`create`](Self::create).
    ///
    /// # Errors
    /// Fails on the first invalid or duplicate record.
    pub fn from_bookings(bookings: impl IntoIterator<Item = Booking>) -> Result<Self> {
        let mut store = Self::new();
        for booking in bookings {
            store.create(booking)?;
        }
        Ok(store)
    }

    /// Persist a proposal, assigning a fresh id when it has none.
    ///
    /// Returns the canonical record, id included.
    ///
    /// # Errors
    /// Returns `InvalidRange` for a malformed interval and `DuplicateId`
    /// when the proposal carries an id that is already present.
    pub fn create(&mut self, mut booking: Booking) -> Result<Booking> {
        booking.validate()?;
        let id = match booking.id {
            Some(id) if self.bookings.contains_key(&id) => {
                return Err(BookingError::DuplicateId(id));
            }
            Some(id) => id,
            None => Uuid::new_v4(),
        };
        booking.id = Some(id);
        self.bookings.insert(id, booking.clone());
        Ok(booking)
    }

    /// Replace an existing record (drag/resize style edits).
    ///
    /// # Errors
    /// Returns `InvalidRange` for a malformed interval and `NotFound` when
    /// the booking has no id or the id is unknown.
    pub fn update(&mut self, booking: Booking) -> Result<Booking> {
        booking.validate()?;
        let id = booking.id.ok_or(BookingError::NotFound(Uuid::nil()))?;
        if !self.bookings.contains_key(&id) {
            return Err(BookingError::NotFound(id));
        }
        self.bookings.insert(id, booking.clone());
        Ok(booking)
    }

    /// Remove a record, returning it.
    ///
    /// # Errors
    /// Returns `NotFound` for an unknown id.
    pub fn delete(&mut self, id: Uuid) -> Result<Booking> {
        self.bookings.remove(&id).ok_or(BookingError::NotFound(id))
    }

    pub fn get(&self, id: Uuid) -> Option<&Booking> {
        self.bookings.get(&id)
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    /// All bookings, sorted by `(group_id, start)`.
    pub fn bookings(&self) -> Vec<Booking> {
        let mut all: Vec<Booking> = self.bookings.values().cloned().collect();
        all.sort_by(|a, b| (&a.group_id, a.start).cmp(&(&b.group_id, b.start)));
        all
    }

    /// Bookings overlapping a view window `[start, end)`, sorted by
    /// `(group_id, start)`.
    pub fn bookings_in_range(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<Booking> {
        let mut hits: Vec<Booking> = self
            .bookings
            .values()
            .filter(|b| b.start < end && b.end > start)
            .cloned()
            .collect();
        hits.sort_by(|a, b| (&a.group_id, a.start).cmp(&(&b.group_id, b.start)));
        hits
    }
}
