//! Command-line interface definitions.
//!
//! Defines the CLI structure for the userdb binary using `clap`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Provision and seed the user-management database
#[derive(Parser, Debug)]
#[command(name = "userdb")]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file (defaults apply when omitted)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the userdb CLI.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Create missing tables and seed reference data in one transaction
    Bootstrap,

    /// Print the schema as SQLite DDL (or as JSON with --json)
    Schema,

    /// Report whether the database is fully provisioned
    Status,
}
