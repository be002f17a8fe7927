//! CLI module
//!
//! - start: load config, seed the registry template, serve HTTP

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, start};
pub use errors::{CliError, CliResult};
