use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{load_settings, save_settings};
use crate::errors::{AppError, AppResult};
use crate::models::settings::UserSettings;
use crate::ui::messages::success;
use crate::utils::colors::{GREEN, GREY, RESET};

/// High-level business logic for the `settings` command.
pub struct SettingsLogic;

impl SettingsLogic {
    pub fn print(pool: &mut DbPool, worker_id: &str) -> AppResult<()> {
        let settings = load_settings(pool, worker_id)?;

        println!("⚙️  Settings for {}:\n", worker_id);

        for key in UserSettings::KEYS {
            // KEYS only contains valid keys
            let value = settings.get(key).unwrap_or(false);
            let (color, label) = if value {
                (GREEN, "on")
            } else {
                (GREY, "off")
            };
            println!("  {:<20} {}{}{}", key, color, label, RESET);
        }

        Ok(())
    }

    /// Apply one `key=value` assignment. Accepted values: on/off,
    /// true/false, 1/0.
    pub fn set(pool: &mut DbPool, worker_id: &str, assignment: &str) -> AppResult<()> {
        let (key, raw) = assignment
            .split_once('=')
            .ok_or_else(|| AppError::InvalidSettingsKey(assignment.to_string()))?;

        let key = key.trim();
        let value = match raw.trim().to_lowercase().as_str() {
            "on" | "true" | "1" => true,
            "off" | "false" | "0" => false,
            other => {
                return Err(AppError::InvalidSettingsKey(format!(
                    "{}: expected on/off, got '{}'",
                    key, other
                )));
            }
        };

        let mut settings = load_settings(pool, worker_id)?;

        if !settings.set(key, value) {
            return Err(AppError::InvalidSettingsKey(key.to_string()));
        }

        save_settings(&pool.conn, &settings)?;

        if let Err(e) = ttlog(
            &pool.conn,
            "settings",
            key,
            &format!("{} set {} = {}", worker_id, key, value),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        success(format!(
            "Setting updated: {} = {}",
            key,
            if value { "on" } else { "off" }
        ));

        Ok(())
    }
}
