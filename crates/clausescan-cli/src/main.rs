//! Clausescan CLI - Find the clauses in a contract that matter.

use clausescan_cli::config::{Config, OutputFormat};
use clausescan_cli::{logging, Cli, Formatter};
use clap::Parser;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // Settings are needed to format errors, so read them leniently here
    let settings = Config::resolve_path(cli.config.as_deref())
        .and_then(|path| Config::load_from(&path))
        .map(|config| config.settings)
        .unwrap_or_default();

    let format: OutputFormat = cli.format.map(Into::into).unwrap_or(settings.format);
    let color_enabled = !cli.no_color && settings.color;
    let formatter = Formatter::new(format, color_enabled);

    if let Err(e) = clausescan_cli::run(cli, &formatter).await {
        tracing::error!(kind = e.kind(), error = %e, "Command failed");
        match format {
            OutputFormat::Json => println!("{}", formatter.format_error(&e)),
            _ => eprintln!("{}", formatter.format_error(&e)),
        }
        std::process::exit(e.exit_code());
    }
}
