//! Compute free time slots for a resource group.
//!
//! Filters bookings to the requested group, clips them to a time window,
//! merges overlapping busy periods, then emits the gaps between merged
//! periods as free slots.

use chrono::{DateTime, Utc};

use crate::booking::Booking;

/// A free time slot within a group's schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct FreeSlot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub duration_minutes: i64,
}

/// Merge a group's overlapping or adjacent busy periods, clipped to the
/// given window.
///
/// Returns a sorted, non-overlapping list of (start, end) intervals.
fn merge_busy_periods(
    bookings: &[Booking],
    group_id: &str,
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
) -> Vec<(DateTime<Utc>, DateTime<Utc>)> {
    // Collect the group's bookings clipped to the window, discarding ones
    // entirely outside.
    let mut intervals: Vec<(DateTime<Utc>, DateTime<Utc>)> = bookings
        .iter()
        .filter(|b| b.group_id == group_id)
        .filter(|b| b.start < window_end && b.end > window_start)
        .map(|b| (b.start.max(window_start), b.end.min(window_end)))
        .collect();

    if intervals.is_empty() {
        return Vec::new();
    }

    // Sort by start time (then by end time for stability).
    intervals.sort_by_key(|&(start, end)| (start, end));

    // Merge overlapping intervals.
    let mut merged: Vec<(DateTime<Utc>, DateTime<Utc>)> = Vec::new();
    for (start, end) in intervals {
        if let Some(last) = merged.last_mut() {
            if start <= last.1 {
                // Overlapping or adjacent -- extend the current interval.
                last.1 = last.1.max(end);
                continue;
            }
        }
        merged.push((start, end));
    }

    merged
}

/// Find free time slots for a group within a time window.
///
/// Bookings may overlap -- overlapping busy periods are merged before
/// computing gaps. Bookings in other groups are ignored. Returns free slots
/// sorted by start time; a degenerate window (`window_start >= window_end`)
/// yields none.
pub fn find_free_slots(
    bookings: &[Booking],
    group_id: &str,
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
) -> Vec<FreeSlot> {
    let merged = merge_busy_periods(bookings, group_id, window_start, window_end);

    let mut free_slots = Vec::new();
    let mut cursor = window_start;

    for (busy_start, busy_end) in &merged {
        if cursor < *busy_start {
            let duration_minutes = (*busy_start - cursor).num_minutes();
            free_slots.push(FreeSlot {
                start: cursor,
                end: *busy_start,
                duration_minutes,
            });
        }
        cursor = cursor.max(*busy_end);
    }

    // Trailing free slot after the last busy period.
    if cursor < window_end {
        let duration_minutes = (window_end - cursor).num_minutes();
        free_slots.push(FreeSlot {
            start: cursor,
            end: window_end,
            duration_minutes,
        });
    }

    free_slots
}

/// Find the first free slot of at least `min_duration_minutes` for a group
/// within the window.
///
/// Delegates to [`find_free_slots`] and returns the first slot meeting the
/// minimum duration requirement.
pub fn find_first_free_slot(
    bookings: &[Booking],
    group_id: &str,
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
    min_duration_minutes: i64,
) -> Option<FreeSlot> {
    find_free_slots(bookings, group_id, window_start, window_end)
        .into_iter()
        .find(|slot| slot.duration_minutes >= min_duration_minutes)
}
