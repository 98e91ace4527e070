use crate::core::calculator::status::WorkStatus;
use crate::core::logic::Core;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_entry, load_day_entries};
use crate::errors::{AppError, AppResult};
use crate::models::action::Action;
use crate::models::day_summary::DaySummary;
use crate::models::entry::TimeEntry;
use crate::models::geo::GeoPoint;
use chrono::{DateTime, Utc};

/// High-level business logic for the `clock` command: the event logger.
pub struct ClockLogic;

impl ClockLogic {
    /// Record one action for `worker_id` and return the recomputed day.
    ///
    /// The transition guard mirrors what the buttons in the original UI
    /// allowed; `force` bypasses it for manual corrections. On append
    /// failure nothing is recorded and the prior state is unchanged.
    pub fn punch(
        pool: &mut DbPool,
        worker_id: &str,
        action: Action,
        work_mode: &str,
        location: Option<GeoPoint>,
        at: Option<DateTime<Utc>>,
        force: bool,
    ) -> AppResult<DaySummary> {
        let timestamp = at.unwrap_or_else(Utc::now);

        //
        // 1. Fetch the day's working set
        //
        let mut entries = load_day_entries(pool, worker_id, timestamp.date_naive())?;

        //
        // 2. Transition guard
        //
        if !force {
            let status = Core::build_daily_summary(&entries, timestamp).status;
            check_transition(&action, status)?;
        }

        //
        // 3. Append (atomic per event; the store assigns the id)
        //
        let entry = TimeEntry::new(worker_id, action, work_mode, location, timestamp);
        let persisted = insert_entry(&pool.conn, &entry)?;

        //
        // 4. Audit trail (non-blocking)
        //
        if let Err(e) = ttlog(
            &pool.conn,
            "clock",
            persisted.action.to_db_str(),
            &format!("{} at {}", worker_id, persisted.timestamp.to_rfc3339()),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        //
        // 5. Optimistic recompute: the fresh entry is authoritative, so
        //    appending it to the working set must match a full re-fetch.
        //
        entries.push(persisted);
        Ok(Core::build_daily_summary(&entries, timestamp))
    }
}

/// Check-in only from offline; checkout any time while present; breaks
/// only in the matching state.
fn check_transition(action: &Action, status: WorkStatus) -> AppResult<()> {
    let allowed = match action {
        Action::CheckIn => status == WorkStatus::Offline,
        Action::CheckOut => status != WorkStatus::Offline,
        Action::BreakStart => status == WorkStatus::Online,
        Action::BreakEnd => status == WorkStatus::OnBreak,
        Action::Unknown(_) => false,
    };

    if allowed {
        Ok(())
    } else {
        Err(AppError::NotAllowed(format!(
            "'{}' while status is '{}' (use --force to override)",
            action.to_db_str(),
            status.as_str()
        )))
    }
}
