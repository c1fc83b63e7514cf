use crate::export::ExportFormat;
use crate::models::view_mode::ViewMode;
use clap::{Parser, Subcommand};

/// Command-line interface definition for lifegrid
#[derive(Parser, Debug)]
#[command(
    name = "lifegrid",
    version = env!("CARGO_PKG_VERSION"),
    about = "Your life in weeks and this year in days, painted in the terminal",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Reference date to use instead of today (YYYY-MM-DD)
    #[arg(global = true, long = "today", value_name = "DATE")]
    pub today: Option<String>,

    /// Override the configured lifespan in years
    #[arg(global = true, long = "lifespan", value_name = "YEARS")]
    pub lifespan: Option<u32>,

    /// Override the configured number of weeks per grid row
    #[arg(global = true, long = "weeks-per-year", value_name = "WEEKS")]
    pub weeks_per_year: Option<u32>,

    /// Disable ANSI colours
    #[arg(global = true, long = "no-color")]
    pub no_color: bool,

    /// Draw cells with plain ASCII characters
    #[arg(global = true, long = "ascii")]
    pub ascii: bool,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, check, migrate or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing or invalid fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

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

    /// Show, set or clear the stored birthdate
    Birthdate {
        /// New birthdate (YYYY-MM-DD); omit to show the current one
        date: Option<String>,

        #[arg(long = "clear", conflicts_with = "date", help = "Remove the stored birthdate")]
        clear: bool,
    },

    /// Render your life in weeks
    Life {
        /// Birthdate to use (YYYY-MM-DD); it is validated and saved first
        #[arg(long = "birthdate", value_name = "DATE")]
        birthdate: Option<String>,

        #[arg(long = "stats-only", help = "Print only the statistics, not the grid")]
        stats_only: bool,
    },

    /// Render the current year in days
    Year {
        #[arg(long = "stats-only", help = "Print only the statistics, not the grid")]
        stats_only: bool,
    },

    /// Render the configured default view (or the one given)
    Show {
        #[arg(long, value_enum)]
        view: Option<ViewMode>,

        #[arg(long = "stats-only", help = "Print only the statistics, not the grid")]
        stats_only: bool,
    },

    /// Describe a single cell of a grid
    Cell {
        #[arg(long, value_enum, default_value = "life")]
        view: ViewMode,

        /// Zero-based cell index (row-major)
        #[arg(long)]
        index: usize,
    },

    /// Export grid cells and statistics
    Export {
        #[arg(long, value_enum)]
        view: Option<ViewMode>,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
