use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::settings::SettingsLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config, worker: &str) -> AppResult<()> {
    if let Commands::Settings { print, set } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        if let Some(assignment) = set {
            SettingsLogic::set(&mut pool, worker, assignment)?;
        }

        if *print {
            SettingsLogic::print(&mut pool, worker)?;
        }
    }

    Ok(())
}
