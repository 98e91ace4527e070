//! punchclock library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    // worker override applies to every command that acts for a worker
    let worker = cli.worker.clone().unwrap_or_else(|| cfg.worker.clone());

    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Clock { .. } => cli::commands::clock::handle(&cli.command, cfg, &worker),
        Commands::Today { .. } => cli::commands::today::handle(&cli.command, cfg, &worker),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg, &worker),
        Commands::Leave { .. } => cli::commands::leave::handle(&cli.command, cfg, &worker),
        Commands::Holidays { .. } => cli::commands::holidays::handle(&cli.command, cfg),
        Commands::Settings { .. } => cli::commands::settings::handle(&cli.command, cfg, &worker),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1. parse CLI
    let cli = Cli::parse();

    // 2. load config ONCE
    let mut cfg = Config::load();

    // 3. apply DB override from the command line, if any
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    // 4. hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
