use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::ClockLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::action::Action;
use crate::models::geo::GeoPoint;
use crate::ui::messages::success;
use crate::utils::formatting::mins2readable;
use crate::utils::time::parse_optional_timestamp;

/// Record one time-entry action and show the recomputed day.
pub fn handle(cmd: &Commands, cfg: &Config, worker: &str) -> AppResult<()> {
    if let Commands::Clock {
        action,
        mode,
        location,
        at,
        force,
    } = cmd
    {
        //
        // 1. Parse action (mandatory, strict on the CLI)
        //
        let action = Action::from_code(action).ok_or_else(|| {
            AppError::InvalidAction(format!(
                "'{}'. Use one of: in, out, break, resume",
                action
            ))
        })?;

        //
        // 2. Work mode tag (free-form; default from config)
        //
        let mode = mode.as_deref().unwrap_or(&cfg.default_work_mode);

        //
        // 3. Optional geolocation
        //
        let geo = match location {
            Some(raw) => Some(
                GeoPoint::from_db_str(raw)
                    .ok_or_else(|| AppError::InvalidLocation(raw.to_string()))?,
            ),
            None => None,
        };

        //
        // 4. Optional timestamp override
        //
        let at_parsed = parse_optional_timestamp(at.as_ref())?;

        //
        // 5. Open DB and execute
        //
        let mut pool = DbPool::new(&cfg.database)?;

        let summary = ClockLogic::punch(&mut pool, worker, action.clone(), mode, geo, at_parsed, *force)?;

        success(format!(
            "Recorded '{}' for {} ({})",
            action.to_db_str(),
            worker,
            mode
        ));

        println!(
            "Status: {} | Worked today: {} ({} min net)",
            summary.status.as_str(),
            mins2readable(summary.totals.net_minutes, false, false),
            summary.totals.net_minutes
        );
    }

    Ok(())
}
