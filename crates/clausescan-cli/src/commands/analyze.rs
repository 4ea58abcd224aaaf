//! Analyze command implementation.

use crate::cli::AnalyzeArgs;
use crate::config::Config;
use crate::document::read_document;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use clausescan_extractor::{Analyzer, AnalyzerConfig};
use tracing::info;

/// Execute the analyze command.
pub async fn execute_analyze(args: AnalyzeArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let analyzer_config = apply_overrides(config.analyzer.clone(), &args)?;

    // Fail on a missing key before touching the document
    let analyzer = Analyzer::from_config(analyzer_config)?;

    let text = read_document(&args.file, args.text, analyzer.config().max_upload_bytes)?;
    info!(chars = text.len(), "Analyzing document");

    let result = tokio::select! {
        result = analyzer.analyze_document(&text) => result?,
        _ = tokio::signal::ctrl_c() => return Err(CliError::Cancelled),
    };

    println!("{}", formatter.format_result(&result)?);
    Ok(())
}

/// Apply command-line flags on top of the loaded configuration.
fn apply_overrides(mut config: AnalyzerConfig, args: &AnalyzeArgs) -> Result<AnalyzerConfig> {
    if let Some(endpoint) = &args.endpoint {
        config.endpoint = endpoint.clone();
    }
    if let Some(timeout) = args.timeout {
        config.request_timeout_secs = timeout;
    }
    if args.strict {
        config.strict_schema = true;
    }

    config.validate().map_err(CliError::Config)?;
    Ok(config)
}
