//! # bookwise-core
//!
//! Booking conflict detection and free/busy computation for group-scoped
//! schedules.
//!
//! A [`Booking`](booking::Booking) reserves a half-open interval
//! `[start, end)` for a resource group. The conflict check is a pure
//! predicate: a proposal conflicts iff it overlaps an existing booking in
//! the same group, where adjacent intervals (one ending exactly when the
//! other starts) do NOT overlap. Validation failures (`start >= end`) are
//! surfaced as errors; a conflict itself is a normal boolean result.
//!
//! ## Modules
//!
//! - [`booking`] — the validated `Booking` model and RFC 3339 parsing
//! - [`conflict`] — group-scoped overlap detection (`has_conflict` and friends)
//! - [`freebusy`] — free slot computation per group within a window
//! - [`store`] — in-memory persistence with id assignment and range queries
//! - [`palette`] — explicit group-to-color display configuration
//! - [`error`] — error types

pub mod booking;
pub mod conflict;
pub mod error;
pub mod freebusy;
pub mod palette;
pub mod store;

pub use booking::Booking;
pub use conflict::{find_conflict, find_conflicts, has_conflict, Conflict};
pub use error::BookingError;
pub use freebusy::{find_first_free_slot, find_free_slots, FreeSlot};
pub use palette::GroupPalette;
pub use store::BookingStore;
