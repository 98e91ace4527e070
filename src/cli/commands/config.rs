use crate::cli::parser::Commands;
use crate::config::{Config, migrate};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::process::Command as ProcCommand;

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate: do_migrate,
        edit_config,
        editor,
    } = cmd
    {
        let conf_file = Config::config_file();

        //
        // 1) PRINT
        //
        if *print_config {
            if conf_file.exists() {
                let content = fs::read_to_string(&conf_file)?;
                println!("📄 {}\n", conf_file.display());
                println!("{}", content);
            } else {
                warning(format!(
                    "No config file at {} (defaults apply). Run `punchclock init` first.",
                    conf_file.display()
                ));
            }
        }

        //
        // 2) CHECK
        //
        if *check {
            let missing = migrate::missing_keys()?;
            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                warning(format!(
                    "Missing keys: {} (run `punchclock config --migrate`)",
                    missing.join(", ")
                ));
            }
        }

        //
        // 3) MIGRATE
        //
        if *do_migrate {
            let added = migrate::fill_missing_keys()?;
            if added.is_empty() {
                info("Nothing to migrate.");
            }
        }

        //
        // 4) EDIT
        //
        if *edit_config {
            if !conf_file.exists() {
                return Err(AppError::Config(format!(
                    "No config file at {}. Run `punchclock init` first.",
                    conf_file.display()
                )));
            }

            let chosen = editor
                .clone()
                .or_else(|| std::env::var("EDITOR").ok())
                .or_else(|| std::env::var("VISUAL").ok())
                .unwrap_or_else(|| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            let status = ProcCommand::new(&chosen).arg(&conf_file).status()?;

            if status.success() {
                success("Configuration file saved.");
            } else {
                warning(format!("Editor '{}' exited with an error.", chosen));
            }
        }
    }

    Ok(())
}
