use chrono::NaiveDate;
use serde::Serialize;

/// A leave request row.
///
/// Requests are always inserted with status `pending`. The approval state
/// machine lives outside this tool; the status column is displayed as
/// stored and never transitioned here.
#[derive(Debug, Clone, Serialize)]
pub struct LeaveRequest {
    pub id: i64,
    pub worker_id: String,
    pub leave_type: String, // sick / vacation / personal / ...
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub status: String, // 'pending' on insert
    pub created_at: String,
}

impl LeaveRequest {
    /// Inclusive number of calendar days covered by the request.
    pub fn days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}
