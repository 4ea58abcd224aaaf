//! Parse command implementation.

use crate::cli::ParseArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use clausescan_domain::AnalysisResult;
use clausescan_extractor::{parse_llm_response, SchemaMode};
use std::io::Read;

/// Execute the parse command.
pub async fn execute_parse(args: ParseArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let raw = read_reply(&args)?;

    let mode = if args.strict {
        SchemaMode::Strict
    } else {
        config.analyzer.schema_mode()
    };

    let result = parse_reply(&raw, mode)?;
    println!("{}", formatter.format_result(&result)?);
    Ok(())
}

fn read_reply(args: &ParseArgs) -> Result<String> {
    match (&args.file, args.stdin) {
        (Some(_), true) => Err(CliError::InvalidInput(
            "Give either a file or --stdin, not both".to_string(),
        )),
        (Some(path), false) => Ok(std::fs::read_to_string(path)?),
        (None, true) => {
            let mut raw = String::new();
            std::io::stdin().read_to_string(&mut raw)?;
            Ok(raw)
        }
        (None, false) => Err(CliError::InvalidInput(
            "No reply given: pass a file or --stdin".to_string(),
        )),
    }
}

/// Run the response parser over a saved model reply.
pub fn parse_reply(raw: &str, mode: SchemaMode) -> Result<AnalysisResult> {
    let entries = parse_llm_response(raw, mode)?;
    Ok(AnalysisResult::new(entries))
}
