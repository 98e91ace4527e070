// src/export/model.rs

use crate::models::entry::TimeEntry;
use serde::Serialize;

/// Flat record for exporting time entries.
#[derive(Serialize, Clone, Debug)]
pub struct EntryExport {
    pub id: i64,
    pub worker_id: String,
    pub timestamp: String,
    pub action: String,
    pub work_mode: String,
    pub location: String,
    pub source: String,
}

impl From<&TimeEntry> for EntryExport {
    fn from(e: &TimeEntry) -> Self {
        Self {
            id: e.id,
            worker_id: e.worker_id.clone(),
            timestamp: e.timestamp.to_rfc3339(),
            action: e.action.to_db_str().to_string(),
            work_mode: e.work_mode.clone(),
            location: e
                .location
                .map(|g| g.to_db_str())
                .unwrap_or_default(),
            source: e.source.clone(),
        }
    }
}
