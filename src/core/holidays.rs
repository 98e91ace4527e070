use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_holiday, load_holidays};
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::colors::{CYAN, RESET};
use chrono::NaiveDate;

/// High-level business logic for the `holidays` command.
pub struct HolidayLogic;

impl HolidayLogic {
    pub fn add(pool: &mut DbPool, date: NaiveDate, name: &str) -> AppResult<()> {
        let id = insert_holiday(&pool.conn, date, name)?;

        if let Err(e) = ttlog(
            &pool.conn,
            "holiday",
            &date.to_string(),
            &format!("Added company holiday '{}'", name),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        success(format!("Company holiday #{} added: {} {}", id, date, name));
        Ok(())
    }

    pub fn print_list(pool: &mut DbPool) -> AppResult<()> {
        let holidays = load_holidays(pool)?;

        if holidays.is_empty() {
            println!("No company holidays recorded.");
            return Ok(());
        }

        println!("📅 Company holidays:\n");

        for h in holidays {
            println!("{}{}{}  {}", CYAN, h.date, RESET, h.name);
        }

        Ok(())
    }
}
