//! Clausescan CLI library.
//!
//! This library provides the core functionality for the clausescan command-line interface,
//! including configuration management, document loading, command execution, and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod document;
pub mod error;
pub mod logging;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;

/// Run a parsed command line.
///
/// `config path` and `config init` never read the file, so they still work
/// when it is broken.
pub async fn run(cli: Cli, formatter: &Formatter) -> Result<()> {
    let path = Config::resolve_path(cli.config.as_deref())?;

    match cli.command {
        Command::Analyze(args) => {
            let config = Config::load(Some(path.as_path()))?;
            commands::execute_analyze(args, &config, formatter).await
        }
        Command::Parse(args) => {
            let config = Config::load(Some(path.as_path()))?;
            commands::execute_parse(args, &config, formatter).await
        }
        Command::Prompt(args) => {
            let config = Config::load(Some(path.as_path()))?;
            commands::execute_prompt(args, &config).await
        }
        Command::Config(args) => commands::execute_config(args, &path, formatter).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn broken_config() -> (TempDir, std::path::PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[analyzer\n").unwrap();
        (dir, path)
    }

    fn cli(path: &std::path::Path, args: &[&str]) -> Cli {
        let mut argv = vec!["clausescan", "--config", path.to_str().unwrap()];
        argv.extend_from_slice(args);
        Cli::parse_from(argv)
    }

    #[tokio::test]
    async fn test_init_force_repairs_broken_config() {
        let (_dir, path) = broken_config();
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        run(cli(&path, &["config", "init", "--force"]), &formatter)
            .await
            .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.settings.format, OutputFormat::Table);
    }

    #[tokio::test]
    async fn test_config_path_ignores_broken_config() {
        let (_dir, path) = broken_config();
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        assert!(run(cli(&path, &["config", "path"]), &formatter).await.is_ok());
    }

    #[tokio::test]
    async fn test_show_still_reports_broken_config() {
        let (_dir, path) = broken_config();
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        let error = run(cli(&path, &["config", "show"]), &formatter)
            .await
            .unwrap_err();
        assert!(matches!(error, CliError::Toml(_)));
    }
}
