use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for sitelogger
/// CLI application to record construction-site daily reports with SQLite
#[derive(Parser)]
#[command(
    name = "sitelogger",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record construction-site daily reports in SQLite, mirrored to per-session JSON snapshots",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the snapshot directory
    #[arg(global = true, long = "json-dir")]
    pub json_dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration, database and snapshot directory
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration and data paths")]
        check: bool,
    },

    /// Save a daily report from a JSON payload file
    Save {
        /// Path to the report payload (JSON)
        #[arg(long = "file", value_name = "FILE")]
        file: String,

        /// Start a new snapshot session instead of reusing the current one
        #[arg(long = "new-session")]
        new_session: bool,
    },

    /// List known projects
    Projects,

    /// List reports for a project, most recent first
    List {
        #[arg(long = "project", value_name = "NAME", help = "Project name")]
        project: String,

        #[arg(
            long = "date",
            value_name = "YYYY-MM-DD",
            help = "Only reports for this date"
        )]
        date: Option<String>,
    },

    /// Show a full report by id
    Show {
        /// Report id as printed by `list`
        report_id: i64,
    },

    /// Inspect or reset snapshot sessions
    Sessions {
        #[arg(long = "list", help = "List snapshot files, newest first")]
        list: bool,

        #[arg(long = "new", help = "Start a new session file on next save")]
        new: bool,

        #[arg(long = "show", value_name = "FILE", help = "Print a snapshot payload")]
        show: Option<String>,
    },

    /// Show report documents fetched from an external document store
    Fetch {
        #[arg(long = "root", value_name = "DIR", help = "Document store root directory")]
        root: String,

        #[arg(long = "app-id", value_name = "ID")]
        app_id: String,

        #[arg(long = "user-id", value_name = "ID")]
        user_id: String,
    },

    /// Export a report
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long = "report", value_name = "ID")]
        report: i64,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Print or manage the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage the database (integrity checks, vacuum, info)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },
}
