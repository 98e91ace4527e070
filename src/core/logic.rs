use crate::core::calculator::{status, timeline, totals};
use crate::models::{day_summary::DaySummary, entry::TimeEntry};
use chrono::{DateTime, Utc};

pub struct Core;

impl Core {
    /// Pure aggregation entry point: `(entries, now) -> DaySummary`.
    ///
    /// No I/O, no clock reads, no shared state. Callers fetch the day's
    /// entries and pick the evaluation instant; recomputing with the same
    /// inputs yields an identical summary.
    pub fn build_daily_summary(entries: &[TimeEntry], now: DateTime<Utc>) -> DaySummary {
        let timeline = timeline::build_timeline(entries, now);
        let totals = totals::aggregate(&timeline);
        let status = status::work_status(&timeline.entries);

        DaySummary {
            timeline,
            totals,
            status,
        }
    }
}
