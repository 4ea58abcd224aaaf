//! Prompt command implementation.

use crate::cli::PromptArgs;
use crate::config::Config;
use crate::document::read_document;
use crate::error::Result;
use clausescan_extractor::PromptBuilder;

/// Execute the prompt command. Nothing is sent upstream.
pub async fn execute_prompt(args: PromptArgs, config: &Config) -> Result<()> {
    let text = read_document(&args.file, args.text, config.analyzer.max_upload_bytes)?;
    println!("{}", PromptBuilder::new(&text).build());
    Ok(())
}
