//! Error types for the CLI application.

use clausescan_extractor::{AnalysisResponse, ErrorReport, ExtractorError};
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Upload exceeds the configured cap
    #[error("Document is {size} bytes, larger than the {limit} byte limit")]
    DocumentTooLarge {
        /// Actual size
        size: u64,
        /// Configured cap
        limit: usize,
    },

    /// Input does not start with a PDF header
    #[error("Not a PDF file: {0}")]
    NotPdf(String),

    /// PDF could not be read
    #[error("Could not read PDF: {0}")]
    PdfExtraction(String),

    /// PDF was readable but had no text
    #[error("Could not extract text from the PDF")]
    NoTextExtracted,

    /// Interrupted before the analysis finished
    #[error("Cancelled")]
    Cancelled,

    /// Analysis failure
    #[error(transparent)]
    Analysis(#[from] ExtractorError),
}

impl CliError {
    /// Stable machine-readable kind
    pub fn kind(&self) -> &'static str {
        match self {
            CliError::Config(_) => "config",
            CliError::Io(_) => "io",
            CliError::Serialization(_) => "serialization",
            CliError::Toml(_) => "config",
            CliError::InvalidInput(_) => "invalid_input",
            CliError::DocumentTooLarge { .. } => "document_too_large",
            CliError::NotPdf(_) => "not_pdf",
            CliError::PdfExtraction(_) => "pdf_extraction",
            CliError::NoTextExtracted => "no_text_extracted",
            CliError::Cancelled => "cancelled",
            CliError::Analysis(e) => e.kind().as_str(),
        }
    }

    /// Whether the user's input caused the failure
    pub fn is_client_error(&self) -> bool {
        match self {
            CliError::InvalidInput(_)
            | CliError::DocumentTooLarge { .. }
            | CliError::NotPdf(_)
            | CliError::PdfExtraction(_)
            | CliError::NoTextExtracted => true,
            CliError::Analysis(e) => e.kind().is_client_error(),
            _ => false,
        }
    }

    /// Process exit code: 2 for client errors, 130 when interrupted, 1 otherwise
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Cancelled => 130,
            e if e.is_client_error() => 2,
            _ => 1,
        }
    }

    /// JSON error envelope: `{"error": {"kind", "message", ...}}`
    pub fn report(&self) -> serde_json::Value {
        match self {
            CliError::Analysis(e) => serde_json::to_value(AnalysisResponse::Failure {
                error: ErrorReport::from(e),
            })
            .unwrap_or(serde_json::Value::Null),
            _ => serde_json::json!({
                "error": {
                    "kind": self.kind(),
                    "message": self.to_string(),
                }
            }),
        }
    }
}
