use crate::models::action::Action;
use crate::models::entry::TimeEntry;
use crate::utils::time::minutes_between;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One continuous work interval bounded by check-in and check-out, or by
/// the evaluation instant when the worker has not checked out yet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Session {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// `end - start` in whole minutes, truncated. May be negative for
    /// inconsistent input; the aggregator floors the net at zero.
    pub minutes: i64,
}

/// A pause inside a session. Bounds are already clamped to the enclosing
/// session; a break that falls outside the session keeps its slot in the
/// list but contributes zero minutes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub minutes: i64,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct DayTimeline {
    /// The day's entries, sorted ascending by timestamp.
    pub entries: Vec<TimeEntry>,
    /// At most one session per day: a later check-in without an
    /// intervening check-out overwrites the earlier one.
    pub session: Option<Session>,
    pub breaks: Vec<BreakInterval>,
}

/// Reconstruct one worker-day from its raw entries.
///
/// Input may arrive in any order; output is a pure function of the entry
/// set and `now`, so any permutation of the input yields the same result.
pub fn build_timeline(entries: &[TimeEntry], now: DateTime<Utc>) -> DayTimeline {
    // -----------------------------
    // Sort entries chronologically
    // -----------------------------
    // Stable: equal timestamps keep their original order.
    let mut sorted = entries.to_vec();
    sorted.sort_by_key(|e| e.timestamp);

    // -----------------------------
    // Single scan
    // -----------------------------
    let mut check_in: Option<DateTime<Utc>> = None;
    let mut check_out: Option<DateTime<Utc>> = None;
    let mut break_start: Option<DateTime<Utc>> = None;
    let mut raw_breaks: Vec<(DateTime<Utc>, DateTime<Utc>)> = Vec::new();

    for ev in &sorted {
        match ev.action {
            // Last check-in wins: a repeated check-in without a checkout
            // in between overwrites the session start.
            Action::CheckIn => check_in = Some(ev.timestamp),
            Action::CheckOut => check_out = Some(ev.timestamp),
            // An unclosed break start is overwritten by a later one.
            Action::BreakStart => break_start = Some(ev.timestamp),
            Action::BreakEnd => {
                // A break end with no open break has no matching start:
                // dropped, not an error.
                if let Some(bs) = break_start.take() {
                    raw_breaks.push((bs, ev.timestamp));
                }
            }
            // Forward compatibility: newer action kinds are skipped.
            Action::Unknown(_) => {}
        }
    }

    // A checkout alone is never sufficient: no check-in, no session,
    // and no breaks either.
    let Some(session_start) = check_in else {
        return DayTimeline {
            entries: sorted,
            session: None,
            breaks: Vec::new(),
        };
    };

    let session_end = check_out.unwrap_or(now);

    // A break still open at the end of the scan closes at the session end
    // (checkout or now).
    if let Some(bs) = break_start {
        raw_breaks.push((bs, session_end));
    }

    let session = Session {
        start: session_start,
        end: session_end,
        minutes: minutes_between(session_start, session_end),
    };

    // Clamp each break to the session bounds. A break starting before
    // check-in or ending after checkout is truncated to the overlap; a
    // clamped interval with non-positive duration stays in the list with
    // a zero contribution.
    let breaks = raw_breaks
        .into_iter()
        .map(|(start, end)| {
            let clamped_start = start.max(session_start);
            let clamped_end = end.min(session_end);
            BreakInterval {
                start: clamped_start,
                end: clamped_end,
                minutes: minutes_between(clamped_start, clamped_end).max(0),
            }
        })
        .collect();

    DayTimeline {
        entries: sorted,
        session: Some(session),
        breaks,
    }
}
