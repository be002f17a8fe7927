//! CLI command implementations

use std::path::Path;

use clap::Parser;

use crate::http::{GridServer, ServerConfig};
use crate::observability::Logger;

use super::args::{Cli, Command};
use super::errors::CliResult;

/// Parse arguments and dispatch
pub fn run() -> CliResult<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Start { config, port } => start(&config, port),
    }
}

/// Boot the server and serve until the process exits
pub fn start(config_path: &Path, port_override: Option<u16>) -> CliResult<()> {
    let mut config = if config_path.exists() {
        ServerConfig::load(config_path)?
    } else {
        Logger::warn(
            "config_missing",
            &[("path", &config_path.display().to_string())],
        );
        ServerConfig::default()
    };

    if let Some(port) = port_override {
        config.port = port;
    }

    let server = GridServer::new(config)?;

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.start())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_start_with_bad_config_file_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let result = start(file.path(), None);
        assert!(result.is_err());
    }

    #[test]
    fn test_start_with_missing_seed_fails() {
        // Default config points at ./data/data.json relative to the cwd;
        // aim it somewhere empty instead.
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"seed_path": "/nonexistent/data.json"}}"#).unwrap();

        let result = start(file.path(), None);
        assert!(result.is_err());
    }
}
