use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "credscore")]
#[command(about = "Explainable credit intelligence dashboard", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Config file (default: $CREDSCORE_CONFIG or the XDG config dir)")]
    pub config: Option<String>,

    #[arg(long, default_value = "info", global = true)]
    pub log_level: LogLevel,

    #[arg(long, global = true, help = "Write logs to this file")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive dashboard (default)
    Dashboard {
        #[command(flatten)]
        source: SourceArgs,

        #[arg(long, help = "Company to load on startup")]
        query: Option<String>,
    },

    /// Fetch one company's score report and print it
    Report {
        /// Company name to look up
        company: String,

        #[command(flatten)]
        source: SourceArgs,

        #[arg(long, default_value = "plain")]
        format: OutputFormat,
    },

    /// Write a default config file
    Init {
        #[arg(long, help = "Overwrite an existing config file")]
        force: bool,
    },
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct SourceArgs {
    #[arg(long, help = "Simulated backend latency in milliseconds")]
    pub delay_ms: Option<u64>,

    #[arg(long, help = "JSON file of score reports to serve instead of the mock")]
    pub fixtures: Option<PathBuf>,
}
