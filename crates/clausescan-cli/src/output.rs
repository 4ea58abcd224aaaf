//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::{CliError, Result};
use clausescan_domain::{AnalysisResult, ClauseEntry};
use colored::*;
use tabled::{
    builder::Builder,
    settings::{
        object::{Columns, Rows},
        Alignment, Modify, Style, Width,
    },
};

/// Column width for clause and explanation text.
const TEXT_COLUMN_WIDTH: usize = 48;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// The selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format an analysis result.
    pub fn format_result(&self, result: &AnalysisResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
            OutputFormat::Table => Ok(self.format_table(result)),
            OutputFormat::Quiet => Ok(format_quiet(result)),
        }
    }

    fn format_table(&self, result: &AnalysisResult) -> String {
        if result.is_empty() {
            return self.colorize("No critical clauses found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "Category", "Clause", "Explanation"]);

        for (i, entry) in result.clauses.iter().enumerate() {
            let index = (i + 1).to_string();
            match entry {
                ClauseEntry::Record(record) => builder.push_record([
                    index.as_str(),
                    record.category.as_str(),
                    record.clause.as_str(),
                    record.explanation.as_str(),
                ]),
                ClauseEntry::Other(value) => {
                    builder.push_record([index, "?".to_string(), value.to_string(), String::new()])
                }
            }
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()))
            .with(Modify::new(Columns::new(2..4)).with(Width::wrap(TEXT_COLUMN_WIDTH)));

        let summary = self.info(&format!("{} clause(s) found", result.len()));
        format!("{}\n{}", table, summary)
    }

    /// Format a failure for the selected output format.
    pub fn format_error(&self, error: &CliError) -> String {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(&error.report())
                .unwrap_or_else(|_| error.to_string()),
            _ => self.error(&error.to_string()),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

/// One category per line; entries that are not records are skipped.
fn format_quiet(result: &AnalysisResult) -> String {
    result
        .records()
        .map(|r| r.category.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
