use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::leave::LeaveLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config, worker: &str) -> AppResult<()> {
    if let Commands::Leave {
        request,
        leave_type,
        from,
        to,
        reason,
        list,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        if *request {
            let leave_type = leave_type
                .as_deref()
                .ok_or_else(|| AppError::MissingArgument("--type".into()))?;

            let from_str = from
                .as_deref()
                .ok_or_else(|| AppError::MissingArgument("--from".into()))?;
            let from_date = date::parse_date(from_str)
                .ok_or_else(|| AppError::InvalidDate(from_str.to_string()))?;

            // Single-day request when --to is omitted
            let to_date = match to.as_deref() {
                Some(s) => date::parse_date(s)
                    .ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
                None => from_date,
            };

            if to_date < from_date {
                return Err(AppError::InvalidDate(format!(
                    "--to {} is before --from {}",
                    to_date, from_date
                )));
            }

            LeaveLogic::request(
                &mut pool,
                worker,
                leave_type,
                from_date,
                to_date,
                reason.as_deref().unwrap_or(""),
            )?;
        }

        if *list {
            LeaveLogic::print_list(&mut pool, worker)?;
        }
    }

    Ok(())
}
