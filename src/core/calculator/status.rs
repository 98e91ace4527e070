use crate::models::action::Action;
use crate::models::entry::TimeEntry;
use serde::Serialize;

/// Presence state derived from the latest entry of the day.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WorkStatus {
    #[default]
    Offline,
    Online,
    OnBreak,
}

impl WorkStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkStatus::Offline => "offline",
            WorkStatus::Online => "online",
            WorkStatus::OnBreak => "break",
        }
    }
}

/// Status follows the most recent entry only:
/// check-in / break-end → online, break-start → break, everything else
/// (checkout, unknown kinds, empty day) → offline.
pub fn work_status(entries: &[TimeEntry]) -> WorkStatus {
    let Some(latest) = entries.iter().max_by_key(|e| e.timestamp) else {
        return WorkStatus::Offline;
    };

    match latest.action {
        Action::CheckIn | Action::BreakEnd => WorkStatus::Online,
        Action::BreakStart => WorkStatus::OnBreak,
        Action::CheckOut | Action::Unknown(_) => WorkStatus::Offline,
    }
}
