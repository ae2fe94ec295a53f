//! Detect overlapping bookings within a resource group.
//!
//! Conflicts are scoped per group: a proposal is compared only against
//! existing bookings with the same `group_id`. Adjacent bookings (where one
//! ends exactly when another starts) are NOT conflicts.

use crate::booking::Booking;
use crate::error::Result;

/// A detected conflict between a proposal and an existing booking.
#[derive(Debug, Clone, PartialEq)]
pub struct Conflict {
    pub existing: Booking,
    pub overlap_minutes: i64,
}

/// Two intervals overlap iff `a.start < b.end && b.start < a.end`.
/// This excludes the adjacent case where `a.end == b.start`.
fn overlaps(a: &Booking, b: &Booking) -> bool {
    a.start < b.end && b.start < a.end
}

/// Does the proposal overlap any existing booking in the same group?
///
/// Returns `true` on the first conflicting booking found, `false` if none
/// conflict. Pure and synchronous; callers decide how to reject.
///
/// # Errors
/// Returns `BookingError::InvalidRange` if the proposal violates
/// `start < end` (before any comparison is made), or if any same-group
/// existing booking does -- caller data-integrity problems are surfaced,
/// not silently skipped.
pub fn has_conflict(proposal: &Booking, existing: &[Booking]) -> Result<bool> {
    Ok(find_conflict(proposal, existing)?.is_some())
}

/// Find the first existing booking that conflicts with the proposal.
///
/// "First" means first in the iteration order of `existing` -- stable and
/// deterministic. Callers wanting a canonical answer should sort by `start`
/// ascending before calling.
///
/// # Errors
/// Same validation as [`has_conflict`].
pub fn find_conflict<'a>(proposal: &Booking, existing: &'a [Booking]) -> Result<Option<&'a Booking>> {
    proposal.validate()?;

    for e in existing.iter().filter(|e| e.group_id == proposal.group_id) {
        e.validate()?;
        if overlaps(proposal, e) {
            return Ok(Some(e));
        }
    }
    Ok(None)
}

/// Find ALL existing bookings that conflict with the proposal, with overlap
/// durations for diagnostics.
///
/// The overlap duration is `min(ends) - max(starts)`, in whole minutes.
/// Results follow the iteration order of `existing`.
///
/// # Errors
/// Same validation as [`has_conflict`]; every same-group booking is
/// validated even after a conflict has been found.
pub fn find_conflicts(proposal: &Booking, existing: &[Booking]) -> Result<Vec<Conflict>> {
    proposal.validate()?;

    let mut conflicts = Vec::new();
    for e in existing.iter().filter(|e| e.group_id == proposal.group_id) {
        e.validate()?;
        if overlaps(proposal, e) {
            let overlap_start = proposal.start.max(e.start);
            let overlap_end = proposal.end.min(e.end);
            conflicts.push(Conflict {
                existing: e.clone(),
                overlap_minutes: (overlap_end - overlap_start).num_minutes(),
            });
        }
    }
    Ok(conflicts)
}
