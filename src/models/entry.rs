use super::{action::Action, geo::GeoPoint};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One worker action, as stored in `time_entries`.
///
/// Entries are immutable once created; the store is append-only and all
/// timestamps are UTC. `work_mode` is a free-form tag (office, wfh, field,
/// meeting, ...) carried through unchanged — the core never validates it.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TimeEntry {
    pub id: i64,
    pub worker_id: String,            // ⇔ time_entries.worker_id
    pub action: Action,               // ⇔ time_entries.action (TEXT)
    pub work_mode: String,            // ⇔ time_entries.work_mode
    pub location: Option<GeoPoint>,   // ⇔ time_entries.location ("lat,lon" | NULL)
    pub timestamp: DateTime<Utc>,     // ⇔ time_entries.timestamp (RFC3339 UTC)
    pub source: String,               // ⇔ time_entries.source (default 'cli')
    pub created_at: String,           // ⇔ time_entries.created_at (ISO8601)
}

impl TimeEntry {
    /// High-level constructor for entries created by the CLI.
    /// - Leaves `id = 0` (assigned by the store on insert)
    /// - Sets `source = "cli"`
    /// - Sets `created_at = now() in ISO8601`
    pub fn new(
        worker_id: &str,
        action: Action,
        work_mode: &str,
        location: Option<GeoPoint>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: 0,
            worker_id: worker_id.to_string(),
            action,
            work_mode: work_mode.to_string(),
            location,
            timestamp,
            source: "cli".to_string(),
            created_at: Utc::now().to_rfc3339(),
        }
    }

    pub fn timestamp_str(&self) -> String {
        self.timestamp.to_rfc3339()
    }

    pub fn time_str(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}
