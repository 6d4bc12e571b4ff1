use clap::{Parser, Subcommand};

/// Command-line interface definition for teamcal
/// CLI application to plan team absences with SQLite
#[derive(Parser)]
#[command(
    name = "teamcal",
    version = env!("CARGO_PKG_VERSION"),
    about = "A team absence planner: month grid of vacation, overtime leave and sick days over public and school holidays",
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

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

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

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add an employee to the roster
    Add {
        /// Employee name
        name: String,

        /// Department: office (Büro) or shipping (Versand)
        #[arg(long = "dept", default_value = "office")]
        dept: String,
    },

    /// Remove an employee and all of their absences
    Del {
        /// Employee id (see `roster`)
        id: String,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List employees grouped by department
    Roster,

    /// Mark a day of absence (replaces an existing mark)
    Set {
        /// Employee id
        id: String,

        /// Date (YYYY-MM-DD)
        date: String,

        /// Absence type: vacation (U), overtime (Ü) or sick (K)
        kind: String,
    },

    /// Remove the absence mark of a day
    Clear {
        /// Employee id
        id: String,

        /// Date (YYYY-MM-DD)
        date: String,
    },

    /// Show the month grid
    Show {
        #[arg(long, short, value_name = "YYYY-MM", help = "Month to show (default: current)")]
        month: Option<String>,

        #[arg(long, conflicts_with = "next", help = "Show the month before")]
        prev: bool,

        #[arg(long, help = "Show the month after")]
        next: bool,

        #[arg(long = "plain", help = "Disable colours")]
        plain: bool,
    },

    /// List public and school holidays of a year
    Holidays {
        #[arg(long, short, help = "Year (default: current)")]
        year: Option<i32>,
    },

    /// Absence statistics per type, department and employee
    Stats {
        #[arg(long, short, help = "Restrict to one year")]
        year: Option<i32>,
    },
}
