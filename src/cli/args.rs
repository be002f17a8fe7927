//! CLI argument definitions using clap
//!
//! Commands:
//! - gridstore start --config <path> [--port <port>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// gridstore - session-scoped in-memory record store over HTTP
#[derive(Parser, Debug)]
#[command(name = "gridstore")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Start {
        /// Path to configuration file (defaults apply if the file is absent)
        #[arg(long, default_value = "./gridstore.json")]
        config: PathBuf,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },
}
