use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::holidays::HolidayLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Holidays {
        list,
        add,
        date: date_arg,
        name,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        if *add {
            let date_str = date_arg
                .as_deref()
                .ok_or_else(|| AppError::MissingArgument("--date".into()))?;
            let d = date::parse_date(date_str)
                .ok_or_else(|| AppError::InvalidDate(date_str.to_string()))?;

            let name = name
                .as_deref()
                .ok_or_else(|| AppError::MissingArgument("--name".into()))?;

            HolidayLogic::add(&mut pool, d, name)?;
        }

        if *list {
            HolidayLogic::print_list(&mut pool)?;
        }
    }

    Ok(())
}
