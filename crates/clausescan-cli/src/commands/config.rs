//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::{Config, OutputFormat};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::Path;

/// Execute the config command.
///
/// Only `show` loads the file; `path` and `init` work from the path alone.
pub async fn execute_config(args: ConfigArgs, path: &Path, formatter: &Formatter) -> Result<()> {
    match args.action {
        ConfigAction::Show => show_config(&Config::load(Some(path))?, formatter),
        ConfigAction::Path => {
            println!("{}", path.display());
            Ok(())
        }
        ConfigAction::Init { force } => init_config(path, force, formatter),
    }
}

/// Show the effective configuration. The API key is reported only as set or unset.
fn show_config(config: &Config, formatter: &Formatter) -> Result<()> {
    let key_set = config.analyzer.api_key.is_some();

    if formatter.format() == OutputFormat::Json {
        let mut value = serde_json::to_value(config)?;
        value["analyzer"]["api_key_set"] = serde_json::Value::Bool(key_set);
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let contents = toml::to_string_pretty(config)
        .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
    println!("{}", contents);

    let key_status = if key_set { "set" } else { "not set" };
    println!("{}", formatter.info(&format!("API key: {}", key_status)));
    Ok(())
}

/// Write a default configuration file.
fn init_config(path: &Path, force: bool, formatter: &Formatter) -> Result<()> {
    if path.exists() && !force {
        return Err(CliError::InvalidInput(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    Config::default().save_to(path)?;
    println!(
        "{}",
        formatter.success(&format!("Wrote {}", path.display()))
    );
    Ok(())
}
