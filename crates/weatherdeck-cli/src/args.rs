use crate::types::{ExportFormat, LogLevel, OutputFormat, UnitArg};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "weatherdeck")]
#[command(about = "Browse, search, and favorite weather records", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Dataset file (.json or .csv); overrides the configured data file
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    /// Config file path (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    /// Temperature unit at startup; overrides the configured default
    #[arg(long, global = true)]
    pub unit: Option<UnitArg>,

    #[arg(long, default_value = "info", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive dashboard (the default when no command is given)
    Dash,

    /// Print records matching a search query, then exit
    List {
        /// Case-insensitive substring to match against city names
        #[arg(long)]
        search: Option<String>,
    },

    /// Write the canonical dataset to stdout or a file
    Export {
        #[arg(id = "export_format", long = "export-format", default_value = "json")]
        format: ExportFormat,

        /// Destination path; stdout when omitted
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Show the resolved configuration
    Config,
}
