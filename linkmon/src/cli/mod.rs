//! CLI module for linkmon
//!
//! Provides the command-line interface for the link monitor server.

pub mod serve;

use clap::{Parser, Subcommand};

/// linkmon - Link health monitor
#[derive(Parser, Debug)]
#[command(name = "linkmon")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    LINKMON_HOST                Bind address (default: 0.0.0.0)
    LINKMON_PORT                Listen port (default: 8000)
    LINKMON_DATABASE_URL        Database URL (default: sqlite:linkmon.db)
    LINKMON_PROBE_TIMEOUT_SECS  Per-probe timeout in seconds (default: 10)
    LINKMON_TZ_OFFSET           Offset used for last_checked (default: +07:00)
    LINKMON_LOG_LEVEL           Log filter (default: info,sqlx=warn)
    LINKMON_LOG_DIR             Directory for daily JSON log files
"#)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the link monitor server
    Serve(serve::ServeArgs),
}
