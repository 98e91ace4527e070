use crate::core::calculator::status::WorkStatus;
use crate::core::calculator::timeline::DayTimeline;
use serde::Serialize;

/// Net totals for one calendar day (UTC day boundary).
///
/// A pure function of the day's entries and the evaluation instant —
/// never persisted, recomputed on demand. All minute values are obtained
/// by truncation, never rounding.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct DailyTotals {
    /// Worked minutes minus break minutes, floored at zero.
    pub net_minutes: i64,
    /// `net_minutes / 60`
    pub total_hours: i64,
    /// `net_minutes % 60`
    pub total_minutes: i64,
}

impl DailyTotals {
    pub fn from_net_minutes(net: i64) -> Self {
        Self {
            net_minutes: net,
            total_hours: net / 60,
            total_minutes: net % 60,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct DaySummary {
    pub timeline: DayTimeline,
    pub totals: DailyTotals,
    pub status: WorkStatus,
}
