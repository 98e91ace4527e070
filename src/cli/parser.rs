use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for punchclock
/// CLI application to record check-in/out and breaks and derive net
/// worked time per day with SQLite
#[derive(Parser)]
#[command(
    name = "punchclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "An employee time clock CLI: check in/out, track breaks, request leave and browse company holidays",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the configured worker id
    #[arg(global = true, long = "worker")]
    pub worker: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Fill missing configuration fields with defaults")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Record a time-entry action (in / out / break / resume)
    Clock {
        /// Action: in, out, break, resume
        action: String,

        /// Work mode tag (office, wfh, field, meeting, ...)
        #[arg(long = "mode", help = "Work mode tag, free-form (default from config)")]
        mode: Option<String>,

        /// Geolocation as "lat,lon"
        #[arg(long = "location", help = "Geolocation as 'lat,lon'")]
        location: Option<String>,

        /// Timestamp override (RFC3339), for backfills and tests
        #[arg(long = "at", hide = true)]
        at: Option<String>,

        /// Skip the status transition guard
        #[arg(long = "force", help = "Record the action even if the current status would forbid it")]
        force: bool,
    },

    /// Show today's reconstructed timeline and net totals
    Today {
        /// Day to evaluate (YYYY-MM-DD, default: today UTC)
        #[arg(long = "date")]
        date: Option<String>,

        #[arg(long = "details", help = "Show the raw entries of the day")]
        details: bool,

        #[arg(
            long = "watch",
            help = "Keep recomputing at the configured interval (an open session grows with the clock)"
        )]
        watch: bool,

        /// Evaluation instant override (RFC3339), for tests
        #[arg(long = "at", hide = true)]
        at: Option<String>,
    },

    /// List daily summaries or raw entries over a period
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        #[arg(long = "today", help = "Show only today's record")]
        now: bool,

        #[arg(long = "events", help = "List raw time entries instead of summaries")]
        events: bool,
    },

    /// Record or list leave requests
    Leave {
        #[arg(long = "request", help = "Record a new leave request")]
        request: bool,

        #[arg(long = "type", help = "Leave type (sick, vacation, personal, ...)")]
        leave_type: Option<String>,

        #[arg(long = "from", help = "First day of leave (YYYY-MM-DD)")]
        from: Option<String>,

        #[arg(long = "to", help = "Last day of leave (YYYY-MM-DD, default: same as --from)")]
        to: Option<String>,

        #[arg(long = "reason", help = "Free-form reason")]
        reason: Option<String>,

        #[arg(long = "list", help = "List recorded leave requests")]
        list: bool,
    },

    /// Browse or maintain the company holiday calendar
    Holidays {
        #[arg(long = "list", help = "List company holidays")]
        list: bool,

        #[arg(long = "add", help = "Add a company holiday")]
        add: bool,

        #[arg(long = "date", help = "Holiday date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long = "name", help = "Holiday name")]
        name: Option<String>,
    },

    /// Show or change notification/privacy settings
    Settings {
        #[arg(long = "print", help = "Print the current settings")]
        print: bool,

        #[arg(long = "set", value_name = "KEY=VALUE", help = "Change one setting (on/off)")]
        set: Option<String>,
    },

    /// Export time entries
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long)]
        force: bool,
    },
}
