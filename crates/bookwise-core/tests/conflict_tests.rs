//! Tests for group-scoped conflict detection.

use bookwise_core::booking::Booking;
use bookwise_core::error::BookingError;
use bookwise_core::{find_conflict, find_conflicts, has_conflict};
use chrono::{TimeZone, Utc};

/// Helper to create a Booking in a group from hour:minute ranges on a given day.
fn booking(
    group: &str,
    year: i32,
    month: u32,
    day: u32,
    start_hour: u32,
    start_min: u32,
    end_hour: u32,
    end_min: u32,
) -> Booking {
    Booking::new(
        group,
        format!("{group} booking"),
        Utc.with_ymd_and_hms(year, month, day, start_hour, start_min, 0)
            .unwrap(),
        Utc.with_ymd_and_hms(year, month, day, end_hour, end_min, 0)
            .unwrap(),
    )
    .unwrap()
}

#[test]
fn overlapping_same_group_is_a_conflict() {
    // Existing: 10:00-11:00, proposal: 10:30-11:30 in the same group
    let existing = vec![booking("a", 2024, 1, 1, 10, 0, 11, 0)];
    let proposal = booking("a", 2024, 1, 1, 10, 30, 11, 30);

    assert!(has_conflict(&proposal, &existing).unwrap());
}

#[test]
fn same_times_different_group_no_conflict() {
    // Identical interval, different group -- groups never conflict with
    // each other.
    let existing = vec![booking("a", 2024, 1, 1, 10, 0, 11, 0)];
    let proposal = booking("b", 2024, 1, 1, 10, 0, 11, 0);

    assert!(!has_conflict(&proposal, &existing).unwrap());
}

#[test]
fn touching_intervals_no_conflict() {
    // Existing ends exactly when the proposal starts -- half-open intervals
    // may touch.
    let existing = vec![booking("a", 2024, 1, 1, 9, 0, 10, 0)];
    let proposal = booking("a", 2024, 1, 1, 10, 0, 11, 0);

    assert!(!has_conflict(&proposal, &existing).unwrap());
}

#[test]
fn identical_intervals_conflict() {
    let existing = vec![booking("a", 2024, 1, 1, 10, 0, 11, 0)];
    let proposal = booking("a", 2024, 1, 1, 10, 0, 11, 0);

    assert!(has_conflict(&proposal, &existing).unwrap());
}

#[test]
fn empty_existing_never_conflicts() {
    let proposal = booking("a", 2024, 1, 1, 10, 0, 11, 0);
    assert!(!has_conflict(&proposal, &[]).unwrap());
}

#[test]
fn fully_contained_proposal_conflicts() {
    // Existing: 09:00-12:00, proposal fully inside: 10:00-11:00
    let existing = vec![booking("a", 2024, 1, 1, 9, 0, 12, 0)];
    let proposal = booking("a", 2024, 1, 1, 10, 0, 11, 0);

    assert!(has_conflict(&proposal, &existing).unwrap());
}

#[test]
fn invalid_proposal_range_rejected() {
    let mut proposal = booking("a", 2024, 1, 1, 10, 0, 11, 0);
    std::mem::swap(&mut proposal.start, &mut proposal.end);

    let existing = vec![booking("a", 2024, 1, 1, 10, 0, 11, 0)];
    let err = has_conflict(&proposal, &existing).unwrap_err();
    assert!(matches!(err, BookingError::InvalidRange { .. }));
}

#[test]
fn invalid_existing_booking_surfaced_not_skipped() {
    // A corrupt record in the caller's data is an error, not a silent skip.
    let mut bad = booking("a", 2024, 1, 1, 14, 0, 15, 0);
    std::mem::swap(&mut bad.start, &mut bad.end);

    let existing = vec![bad];
    let proposal = booking("a", 2024, 1, 1, 10, 0, 11, 0);
    let err = has_conflict(&proposal, &existing).unwrap_err();
    assert!(matches!(err, BookingError::InvalidRange { .. }));
}

#[test]
fn invalid_existing_in_other_group_ignored() {
    // Validation is scoped with the comparison: a corrupt record in a group
    // the proposal never touches does not block the check.
    let mut bad = booking("b", 2024, 1, 1, 14, 0, 15, 0);
    std::mem::swap(&mut bad.start, &mut bad.end);

    let existing = vec![bad];
    let proposal = booking("a", 2024, 1, 1, 10, 0, 11, 0);
    assert!(!has_conflict(&proposal, &existing).unwrap());
}

#[test]
fn find_conflict_returns_first_in_sequence_order() {
    // Both existing bookings overlap the proposal; the one passed first wins.
    let first = booking("a", 2024, 1, 1, 10, 30, 11, 30);
    let second = booking("a", 2024, 1, 1, 10, 0, 11, 0);
    let existing = vec![first.clone(), second];

    let proposal = booking("a", 2024, 1, 1, 10, 45, 11, 15);
    let hit = find_conflict(&proposal, &existing).unwrap();
    assert_eq!(hit, Some(&first));
}

#[test]
fn find_conflict_none_when_clear() {
    let existing = vec![booking("a", 2024, 1, 1, 9, 0, 10, 0)];
    let proposal = booking("a", 2024, 1, 1, 11, 0, 12, 0);
    assert_eq!(find_conflict(&proposal, &existing).unwrap(), None);
}

#[test]
fn find_conflicts_reports_overlap_minutes() {
    // Existing: 10:00-11:00, proposal: 10:30-11:30 → 30-minute overlap
    let existing = vec![booking("a", 2024, 1, 1, 10, 0, 11, 0)];
    let proposal = booking("a", 2024, 1, 1, 10, 30, 11, 30);

    let conflicts = find_conflicts(&proposal, &existing).unwrap();
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].overlap_minutes, 30);
}

#[test]
fn find_conflicts_collects_all_hits() {
    let existing = vec![
        booking("a", 2024, 1, 1, 9, 0, 10, 30),  // overlaps 30 min
        booking("a", 2024, 1, 1, 11, 30, 13, 0), // overlaps 30 min
        booking("a", 2024, 1, 1, 14, 0, 15, 0),  // clear
        booking("b", 2024, 1, 1, 10, 0, 12, 0),  // other group
    ];
    let proposal = booking("a", 2024, 1, 1, 10, 0, 12, 0);

    let conflicts = find_conflicts(&proposal, &existing).unwrap();
    assert_eq!(conflicts.len(), 2);
    assert_eq!(conflicts[0].overlap_minutes, 30);
    assert_eq!(conflicts[1].overlap_minutes, 30);
}

#[test]
fn iso8601_scenario_overlap_detected() {
    // existing: group a, 10:00-11:00; proposal: group a, 10:30-11:30 → conflict
    let existing = vec![Booking::from_rfc3339(
        "a",
        "standup",
        "2024-01-01T10:00:00Z",
        "2024-01-01T11:00:00Z",
    )
    .unwrap()];
    let proposal = Booking::from_rfc3339(
        "a",
        "review",
        "2024-01-01T10:30:00Z",
        "2024-01-01T11:30:00Z",
    )
    .unwrap();

    assert!(has_conflict(&proposal, &existing).unwrap());
}

#[test]
fn iso8601_scenario_other_group_clear() {
    // Same times as above but proposal targets group b → no conflict.
    let existing = vec![Booking::from_rfc3339(
        "a",
        "standup",
        "2024-01-01T10:00:00Z",
        "2024-01-01T11:00:00Z",
    )
    .unwrap()];
    let proposal = Booking::from_rfc3339(
        "b",
        "review",
        "2024-01-01T10:30:00Z",
        "2024-01-01T11:30:00Z",
    )
    .unwrap();

    assert!(!has_conflict(&proposal, &existing).unwrap());
}

#[test]
fn bad_timestamp_string_rejected_at_parse() {
    let err = Booking::from_rfc3339("a", "x", "2024-01-01 10:00", "2024-01-01T11:00:00Z")
        .unwrap_err();
    assert!(matches!(err, BookingError::InvalidTimestamp(_)));
}

#[test]
fn zero_length_interval_rejected() {
    let err = Booking::from_rfc3339(
        "a",
        "x",
        "2024-01-01T10:00:00Z",
        "2024-01-01T10:00:00Z",
    )
    .unwrap_err();
    assert!(matches!(err, BookingError::InvalidRange { .. }));
}
