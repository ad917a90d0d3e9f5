use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for timekeeper
/// CLI application to track time per project with a pause/resume stopwatch
#[derive(Parser)]
#[command(
    name = "timekeeper",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple time tracking CLI: run a per-project stopwatch and keep sessions in a JSON file with rotating backups",
    long_about = None
)]
pub struct Cli {
    /// Override the data file path (useful for tests or a custom location)
    #[arg(global = true, long = "data")]
    pub data: Option<String>,

    /// Override the configuration directory
    #[arg(global = true, long = "config-dir")]
    pub config_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive tracking session for a project
    Track {
        /// Project name the session is billed to
        project: String,

        /// Free-text note attached to the session
        #[arg(long = "memo", default_value = "")]
        memo: String,

        /// Link the session to a catalog project by id
        #[arg(long = "project-id")]
        project_id: Option<String>,
    },

    /// List recorded sessions
    List {
        /// Only show sessions for this project name
        #[arg(long = "project")]
        project: Option<String>,
    },

    /// Edit a recorded session by id
    Edit {
        /// Entry id as shown by `list`
        id: String,

        #[arg(long = "project", help = "New project name")]
        project: Option<String>,

        #[arg(long = "memo", help = "New memo text")]
        memo: Option<String>,

        #[arg(
            long = "duration",
            help = "New duration as HH:MM:SS or MM:SS (malformed input counts as 0)"
        )]
        duration: Option<String>,

        #[arg(long = "invoiced", help = "Mark as invoiced: yes or no")]
        invoiced: Option<String>,
    },

    /// Delete a recorded session by id
    Del {
        /// Entry id as shown by `list`
        id: String,

        #[arg(long = "yes", help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// Back up the data file now
    Backup {
        #[arg(
            long = "manual",
            help = "Tag the backup as manual; manual backups are never pruned"
        )]
        manual: bool,
    },

    /// Restore the data file from a backup
    Restore {
        #[arg(long = "list", help = "List available backups")]
        list: bool,

        #[arg(long = "file", help = "Backup file name to restore from")]
        file: Option<String>,

        #[arg(long = "yes", help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// Export sessions or the per-project report
    Export {
        #[arg(long = "format", value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long = "file", help = "Output file path")]
        file: String,

        #[arg(long = "report", help = "Export per-project totals instead of sessions")]
        report: bool,
    },

    /// Import sessions from a CSV file
    Import {
        #[arg(long = "file", help = "CSV file to import")]
        file: String,
    },

    /// Show per-project totals
    Report,

    /// List or extend the project catalog
    Projects {
        #[arg(long = "add", help = "Add a project with this name")]
        add: Option<String>,

        #[arg(long = "id", help = "Id for the added project (defaults to the name, lowercased)")]
        id: Option<String>,

        #[arg(long = "description", help = "Description for the added project")]
        description: Option<String>,
    },

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "set-auto-backup", help = "Enable or disable auto-backup: on or off")]
        set_auto_backup: Option<String>,

        #[arg(long = "set-theme", help = "Set the UI theme name")]
        set_theme: Option<String>,
    },
}
