use crate::export::ReportFormat;
use crate::models::time_field::TimeField;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rOvertime
/// CLI application to record daily times and compute overtime
#[derive(Parser)]
#[command(
    name = "rovertime",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record entry, lunch break and exit times per month and report overtime",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

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

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Report fields missing from the configuration file")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, information)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Show the days of a month with their extra hours
    Show {
        /// Month to show (YYYY-MM, default: current month)
        #[arg(long, short)]
        month: Option<String>,

        #[arg(long, conflicts_with = "next", help = "Show the month before --month")]
        prev: bool,

        #[arg(long, help = "Show the month after --month")]
        next: bool,
    },

    /// Record a time for a day
    Set {
        /// Day (YYYY-MM-DD)
        date: String,

        #[arg(long, short, value_enum, help = "Which time to record")]
        field: TimeField,

        /// Time (HH:MM); the current time when omitted
        #[arg(long, short)]
        time: Option<String>,
    },

    /// Remove a recorded time
    Clear {
        /// Day (YYYY-MM-DD)
        date: String,

        #[arg(long, short, value_enum, help = "Which time to clear")]
        field: TimeField,
    },

    /// Generate the monthly overtime report
    Report {
        /// Month to report (YYYY-MM, default: current month)
        #[arg(long, short)]
        month: Option<String>,

        #[arg(long, value_enum, default_value = "html")]
        format: ReportFormat,

        /// Output file; textual formats go to stdout when omitted
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },
}
