use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_leave, load_leaves};
use crate::errors::AppResult;
use crate::models::leave::LeaveRequest;
use crate::ui::messages::success;
use crate::utils::colors::{GREEN, GREY, RESET, YELLOW};
use chrono::{NaiveDate, Utc};

/// High-level business logic for the `leave` command.
///
/// Requests only: they are stored as `pending` and listed as-is. Approval
/// happens elsewhere; this tool never transitions the status.
pub struct LeaveLogic;

impl LeaveLogic {
    pub fn request(
        pool: &mut DbPool,
        worker_id: &str,
        leave_type: &str,
        from: NaiveDate,
        to: NaiveDate,
        reason: &str,
    ) -> AppResult<LeaveRequest> {
        let req = LeaveRequest {
            id: 0,
            worker_id: worker_id.to_string(),
            leave_type: leave_type.to_string(),
            start_date: from,
            end_date: to,
            reason: reason.to_string(),
            status: "pending".to_string(),
            created_at: Utc::now().to_rfc3339(),
        };

        let persisted = insert_leave(&pool.conn, &req)?;

        if let Err(e) = ttlog(
            &pool.conn,
            "leave",
            leave_type,
            &format!("{} requested {} → {}", worker_id, from, to),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        success(format!(
            "Leave request recorded: {} {} → {} ({} day{})",
            persisted.leave_type,
            persisted.start_date,
            persisted.end_date,
            persisted.days(),
            if persisted.days() == 1 { "" } else { "s" },
        ));

        Ok(persisted)
    }

    pub fn print_list(pool: &mut DbPool, worker_id: &str) -> AppResult<()> {
        let requests = load_leaves(pool, worker_id)?;

        if requests.is_empty() {
            println!("No leave requests for {}", worker_id);
            return Ok(());
        }

        println!("📋 Leave requests for {}:\n", worker_id);

        for r in requests {
            let status_color = match r.status.as_str() {
                "approved" => GREEN,
                "pending" => YELLOW,
                _ => GREY,
            };

            println!(
                "{:>4}: {} → {} | {:<10} | {}{}{}{}",
                r.id,
                r.start_date,
                r.end_date,
                r.leave_type,
                status_color,
                r.status,
                RESET,
                if r.reason.is_empty() {
                    String::new()
                } else {
                    format!(" | {}", r.reason)
                },
            );
        }

        Ok(())
    }
}
