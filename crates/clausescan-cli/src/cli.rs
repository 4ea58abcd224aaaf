//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Clausescan - Find the clauses in a contract that matter.
#[derive(Debug, Parser)]
#[command(name = "clausescan")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "CLAUSESCAN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (categories only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze a document and list its critical clauses
    Analyze(AnalyzeArgs),

    /// Parse a saved model reply without calling the model
    Parse(ParseArgs),

    /// Print the prompt that would be sent for a document
    Prompt(PromptArgs),

    /// Inspect or create the configuration file
    Config(ConfigArgs),
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// Document to analyze (PDF unless --text is given)
    pub file: PathBuf,

    /// Treat the input as UTF-8 plain text instead of PDF
    #[arg(long)]
    pub text: bool,

    /// Reject replies whose elements are not clause records
    #[arg(long)]
    pub strict: bool,

    /// Upstream timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// generateContent endpoint URL
    #[arg(long)]
    pub endpoint: Option<String>,
}

/// Arguments for the parse command.
#[derive(Debug, Parser)]
pub struct ParseArgs {
    /// File containing a raw model reply
    pub file: Option<PathBuf>,

    /// Read the reply from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Reject elements that are not clause records
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the prompt command.
#[derive(Debug, Parser)]
pub struct PromptArgs {
    /// Document to build the prompt for
    pub file: PathBuf,

    /// Treat the input as UTF-8 plain text instead of PDF
    #[arg(long)]
    pub text: bool,
}

/// Arguments for config management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config management actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
