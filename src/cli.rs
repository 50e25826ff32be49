//! Command-line interface definitions.

use clap::{Parser, Subcommand};

/// Exam check-in server
#[derive(Debug, Parser)]
#[command(name = "checkin-server", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, env = "CHECKIN_CONFIG", default_value = "config/default.toml")]
    pub config: String,

    /// Environment overlay (loads `config/{env}.toml`)
    #[arg(short, long, env = "CHECKIN_ENV", default_value = "development")]
    pub env: String,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server (default)
    Serve,
    /// Print account and seat pool counters
    Stats,
}
