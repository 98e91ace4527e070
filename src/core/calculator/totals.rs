use crate::core::calculator::timeline::DayTimeline;
use crate::models::day_summary::DailyTotals;

/// Reduce a reconstructed day to its net totals.
///
/// net = max(0, session minutes − clamped break minutes). Every term was
/// already truncated to whole minutes by the reconstructor; nothing is
/// rounded here either — payroll consumers rely on bit-exact truncation.
pub fn aggregate(timeline: &DayTimeline) -> DailyTotals {
    let Some(session) = &timeline.session else {
        return DailyTotals::default();
    };

    let break_minutes: i64 = timeline.breaks.iter().map(|b| b.minutes).sum();
    let net = (session.minutes - break_minutes).max(0);

    DailyTotals::from_net_minutes(net)
}
