//! CLI argument parsing for hiersel
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod format;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use output::OutputFormat;

/// Hiersel - sparse tri-state selection over hierarchies
#[derive(Parser, Debug)]
#[command(name = "hiersel")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Selection config file (defaults to the per-user config)
    #[arg(long, global = true, env = "HIERSEL_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay recorded row clicks and print the resulting filter
    Replay {
        /// JSON array of click events
        events: PathBuf,

        /// Filter currently applied by the host, restored before replaying
        #[arg(long)]
        initial: Option<PathBuf>,

        /// Treat an empty selection as "unselect everything"
        #[arg(long)]
        unselect_all: bool,

        /// Target column query name `Table.Column` (can be specified multiple times)
        #[arg(long = "column", action = clap::ArgAction::Append)]
        columns: Vec<String>,
    },

    /// Resolve the display state of a hierarchy path
    Resolve {
        /// Filter document (JSON)
        filter: PathBuf,

        /// Path segments from the hierarchy root
        #[arg(required = true)]
        path: Vec<String>,
    },

    /// Check a filter document against the tree invariants
    Verify {
        /// Filter document (JSON)
        filter: PathBuf,
    },
}
