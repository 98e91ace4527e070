//! Pure-calculator tests: the `(entries, now) -> DaySummary` function
//! and its edge-case policies.

use chrono::{DateTime, Utc};
use punchclock::core::calculator::status::WorkStatus;
use punchclock::core::logic::Core;
use punchclock::models::action::Action;
use punchclock::models::entry::TimeEntry;

fn ts(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .expect("test timestamp")
        .with_timezone(&Utc)
}

fn entry(action: Action, at: &str) -> TimeEntry {
    TimeEntry::new("w1", action, "office", None, ts(at))
}

#[test]
fn scenario_a_plain_workday() {
    let entries = vec![
        entry(Action::CheckIn, "2025-10-01T09:00:00Z"),
        entry(Action::CheckOut, "2025-10-01T17:00:00Z"),
    ];

    let summary = Core::build_daily_summary(&entries, ts("2025-10-01T18:00:00Z"));

    let session = summary.timeline.session.as_ref().expect("session");
    assert_eq!(session.minutes, 480);
    assert!(summary.timeline.breaks.is_empty());
    assert_eq!(summary.totals.net_minutes, 480);
    assert_eq!(summary.totals.total_hours, 8);
    assert_eq!(summary.totals.total_minutes, 0);
    assert_eq!(summary.status, WorkStatus::Offline);
}

#[test]
fn scenario_b_workday_with_break() {
    let entries = vec![
        entry(Action::CheckIn, "2025-10-01T09:00:00Z"),
        entry(Action::BreakStart, "2025-10-01T12:00:00Z"),
        entry(Action::BreakEnd, "2025-10-01T12:30:00Z"),
        entry(Action::CheckOut, "2025-10-01T17:00:00Z"),
    ];

    let summary = Core::build_daily_summary(&entries, ts("2025-10-01T18:00:00Z"));

    assert_eq!(summary.timeline.breaks.len(), 1);
    assert_eq!(summary.timeline.breaks[0].minutes, 30);
    assert_eq!(summary.totals.net_minutes, 450);
    assert_eq!(summary.totals.total_hours, 7);
    assert_eq!(summary.totals.total_minutes, 30);
}

#[test]
fn scenario_c_open_session_grows_with_now() {
    let entries = vec![entry(Action::CheckIn, "2025-10-01T09:00:00Z")];

    let at_ten = Core::build_daily_summary(&entries, ts("2025-10-01T10:00:00Z"));
    assert_eq!(at_ten.totals.net_minutes, 60);
    assert_eq!(at_ten.totals.total_hours, 1);
    assert_eq!(at_ten.totals.total_minutes, 0);
    assert_eq!(at_ten.status, WorkStatus::Online);

    // same entries, five minutes later: totals grow without new events
    let later = Core::build_daily_summary(&entries, ts("2025-10-01T10:05:00Z"));
    assert_eq!(later.totals.net_minutes, 65);
    assert_eq!(later.totals.total_minutes, 5);
}

#[test]
fn scenario_d_empty_day() {
    let summary = Core::build_daily_summary(&[], ts("2025-10-01T12:00:00Z"));

    assert!(summary.timeline.session.is_none());
    assert!(summary.timeline.breaks.is_empty());
    assert_eq!(summary.totals.net_minutes, 0);
    assert_eq!(summary.totals.total_hours, 0);
    assert_eq!(summary.totals.total_minutes, 0);
    assert_eq!(summary.status, WorkStatus::Offline);
}

#[test]
fn scenario_e_orphan_break_end_only() {
    let entries = vec![entry(Action::BreakEnd, "2025-10-01T10:00:00Z")];

    let summary = Core::build_daily_summary(&entries, ts("2025-10-01T12:00:00Z"));

    assert!(summary.timeline.session.is_none());
    assert!(summary.timeline.breaks.is_empty());
    assert_eq!(summary.totals.net_minutes, 0);
}

#[test]
fn scenario_f_break_clamped_to_session_start() {
    let entries = vec![
        entry(Action::CheckIn, "2025-10-01T09:00:00Z"),
        entry(Action::BreakStart, "2025-10-01T08:30:00Z"),
        entry(Action::BreakEnd, "2025-10-01T09:15:00Z"),
    ];

    let summary = Core::build_daily_summary(&entries, ts("2025-10-01T17:00:00Z"));

    // the break started before check-in: clamped to [09:00, 09:15]
    assert_eq!(summary.timeline.breaks.len(), 1);
    let b = &summary.timeline.breaks[0];
    assert_eq!(b.start, ts("2025-10-01T09:00:00Z"));
    assert_eq!(b.end, ts("2025-10-01T09:15:00Z"));
    assert_eq!(b.minutes, 15);

    assert_eq!(summary.totals.net_minutes, 480 - 15);
}

#[test]
fn orphan_break_end_between_other_entries_is_dropped() {
    let entries = vec![
        entry(Action::CheckIn, "2025-10-01T09:00:00Z"),
        entry(Action::BreakEnd, "2025-10-01T10:00:00Z"),
        entry(Action::CheckOut, "2025-10-01T17:00:00Z"),
    ];

    let summary = Core::build_daily_summary(&entries, ts("2025-10-01T18:00:00Z"));

    assert!(summary.timeline.breaks.is_empty());
    assert_eq!(summary.totals.net_minutes, 480);
}

#[test]
fn checkout_without_checkin_yields_empty_totals() {
    let entries = vec![entry(Action::CheckOut, "2025-10-01T17:00:00Z")];

    let summary = Core::build_daily_summary(&entries, ts("2025-10-01T18:00:00Z"));

    assert!(summary.timeline.session.is_none());
    assert_eq!(summary.totals.net_minutes, 0);
}

#[test]
fn last_check_in_wins() {
    let entries = vec![
        entry(Action::CheckIn, "2025-10-01T08:00:00Z"),
        entry(Action::CheckIn, "2025-10-01T10:00:00Z"),
        entry(Action::CheckOut, "2025-10-01T17:00:00Z"),
    ];

    let summary = Core::build_daily_summary(&entries, ts("2025-10-01T18:00:00Z"));

    let session = summary.timeline.session.as_ref().expect("session");
    assert_eq!(session.start, ts("2025-10-01T10:00:00Z"));
    assert_eq!(summary.totals.net_minutes, 420);
}

#[test]
fn unclosed_break_runs_to_session_end() {
    let entries = vec![
        entry(Action::CheckIn, "2025-10-01T09:00:00Z"),
        entry(Action::BreakStart, "2025-10-01T16:00:00Z"),
        entry(Action::CheckOut, "2025-10-01T17:00:00Z"),
    ];

    let summary = Core::build_daily_summary(&entries, ts("2025-10-01T18:00:00Z"));

    assert_eq!(summary.timeline.breaks.len(), 1);
    assert_eq!(summary.timeline.breaks[0].minutes, 60);
    assert_eq!(summary.totals.net_minutes, 420);
}

#[test]
fn break_end_after_checkout_is_clamped() {
    let entries = vec![
        entry(Action::CheckIn, "2025-10-01T09:00:00Z"),
        entry(Action::BreakStart, "2025-10-01T16:30:00Z"),
        entry(Action::BreakEnd, "2025-10-01T17:30:00Z"),
        entry(Action::CheckOut, "2025-10-01T17:00:00Z"),
    ];

    let summary = Core::build_daily_summary(&entries, ts("2025-10-01T18:00:00Z"));

    assert_eq!(summary.timeline.breaks.len(), 1);
    assert_eq!(summary.timeline.breaks[0].end, ts("2025-10-01T17:00:00Z"));
    assert_eq!(summary.timeline.breaks[0].minutes, 30);
    assert_eq!(summary.totals.net_minutes, 450);
}

#[test]
fn break_fully_outside_session_contributes_zero() {
    let entries = vec![
        entry(Action::CheckIn, "2025-10-01T09:00:00Z"),
        entry(Action::CheckOut, "2025-10-01T12:00:00Z"),
        entry(Action::BreakStart, "2025-10-01T13:00:00Z"),
        entry(Action::BreakEnd, "2025-10-01T13:30:00Z"),
    ];

    let summary = Core::build_daily_summary(&entries, ts("2025-10-01T18:00:00Z"));

    // kept in the list, zero contribution
    assert_eq!(summary.timeline.breaks.len(), 1);
    assert_eq!(summary.timeline.breaks[0].minutes, 0);
    assert_eq!(summary.totals.net_minutes, 180);
}

#[test]
fn net_minutes_never_negative() {
    // breaks longer than the session itself
    let entries = vec![
        entry(Action::CheckIn, "2025-10-01T09:00:00Z"),
        entry(Action::BreakStart, "2025-10-01T09:00:00Z"),
        entry(Action::BreakEnd, "2025-10-01T09:30:00Z"),
        entry(Action::BreakStart, "2025-10-01T09:30:00Z"),
        entry(Action::BreakEnd, "2025-10-01T10:00:00Z"),
        entry(Action::CheckOut, "2025-10-01T09:45:00Z"),
    ];

    let summary = Core::build_daily_summary(&entries, ts("2025-10-01T18:00:00Z"));

    assert!(summary.totals.net_minutes >= 0);
    assert_eq!(summary.totals.net_minutes, 0);
}

#[test]
fn unknown_actions_are_ignored() {
    let entries = vec![
        entry(Action::CheckIn, "2025-10-01T09:00:00Z"),
        entry(Action::Unknown("lunch_order".into()), "2025-10-01T11:00:00Z"),
        entry(Action::CheckOut, "2025-10-01T17:00:00Z"),
    ];

    let summary = Core::build_daily_summary(&entries, ts("2025-10-01T18:00:00Z"));

    assert_eq!(summary.totals.net_minutes, 480);
}

#[test]
fn fractional_seconds_truncate_not_round() {
    // 7h59m30s of presence → 479 whole minutes, never rounded up
    let entries = vec![
        entry(Action::CheckIn, "2025-10-01T09:00:45Z"),
        entry(Action::CheckOut, "2025-10-01T17:00:15Z"),
    ];

    let summary = Core::build_daily_summary(&entries, ts("2025-10-01T18:00:00Z"));

    assert_eq!(summary.totals.net_minutes, 479);
    assert_eq!(summary.totals.total_hours, 7);
    assert_eq!(summary.totals.total_minutes, 59);
}

#[test]
fn idempotent_for_a_frozen_now() {
    let entries = vec![
        entry(Action::CheckIn, "2025-10-01T09:00:00Z"),
        entry(Action::BreakStart, "2025-10-01T12:00:00Z"),
    ];
    let now = ts("2025-10-01T14:00:00Z");

    let first = Core::build_daily_summary(&entries, now);
    let second = Core::build_daily_summary(&entries, now);

    assert_eq!(first, second);
}

/// Heap's algorithm, enough for the small fixed sets used below.
fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    fn heap<T: Clone>(k: usize, arr: &mut Vec<T>, out: &mut Vec<Vec<T>>) {
        if k <= 1 {
            out.push(arr.clone());
            return;
        }
        for i in 0..k {
            heap(k - 1, arr, out);
            if k % 2 == 0 {
                arr.swap(i, k - 1);
            } else {
                arr.swap(0, k - 1);
            }
        }
    }

    let mut arr = items.to_vec();
    let mut out = Vec::new();
    heap(arr.len(), &mut arr, &mut out);
    out
}

#[test]
fn input_order_does_not_matter() {
    let entries = vec![
        entry(Action::CheckIn, "2025-10-01T09:00:00Z"),
        entry(Action::BreakStart, "2025-10-01T12:00:00Z"),
        entry(Action::BreakEnd, "2025-10-01T12:30:00Z"),
        entry(Action::CheckOut, "2025-10-01T17:00:00Z"),
    ];
    let now = ts("2025-10-01T18:00:00Z");

    let reference = Core::build_daily_summary(&entries, now);

    for perm in permutations(&entries) {
        let summary = Core::build_daily_summary(&perm, now);
        assert_eq!(summary, reference);
    }
}

#[test]
fn descending_input_matches_ascending() {
    let asc = vec![
        entry(Action::CheckIn, "2025-10-01T09:00:00Z"),
        entry(Action::BreakStart, "2025-10-01T12:00:00Z"),
        entry(Action::BreakEnd, "2025-10-01T12:30:00Z"),
        entry(Action::CheckOut, "2025-10-01T17:00:00Z"),
    ];
    let mut desc = asc.clone();
    desc.reverse();

    let now = ts("2025-10-01T18:00:00Z");
    assert_eq!(
        Core::build_daily_summary(&asc, now),
        Core::build_daily_summary(&desc, now)
    );
}
