//! Request and response types for analysis

use crate::error::ExtractorError;
use clausescan_domain::AnalysisResult;
use serde::Serialize;
use std::fmt;

/// How strictly parsed elements are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaMode {
    /// Accept whatever JSON array the model returned
    Permissive,
    /// Require every element to be a clause record
    Strict,
}

impl Default for SchemaMode {
    fn default() -> Self {
        SchemaMode::Permissive
    }
}

/// Stable classification of an [`ExtractorError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Input document had no text
    EmptyDocument,
    /// Network or HTTP failure talking to the generative endpoint
    Upstream,
    /// Endpoint answered 200 with an unexpected envelope
    UpstreamResponseShape,
    /// Model reply did not contain a parseable JSON array
    ExtractionFormat,
    /// Missing credential or invalid configuration
    Config,
}

impl ErrorKind {
    /// Machine-readable code
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::EmptyDocument => "empty_document",
            ErrorKind::Upstream => "upstream",
            ErrorKind::UpstreamResponseShape => "upstream_response_shape",
            ErrorKind::ExtractionFormat => "extraction_format",
            ErrorKind::Config => "config",
        }
    }

    /// Whether the caller's input caused the failure
    pub fn is_client_error(&self) -> bool {
        matches!(self, ErrorKind::EmptyDocument)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-facing description of a failed analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    /// Stable kind
    pub kind: ErrorKind,

    /// Human-readable detail
    pub message: String,

    /// Upstream HTTP status, for upstream failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream_status: Option<u16>,

    /// Upstream response body, for upstream failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream_body: Option<String>,
}

impl From<&ExtractorError> for ErrorReport {
    fn from(error: &ExtractorError) -> Self {
        Self {
            kind: error.kind(),
            message: error.to_string(),
            upstream_status: error.upstream_status(),
            upstream_body: error.upstream_body().map(str::to_string),
        }
    }
}

/// What the core hands back across the process boundary
///
/// Serializes to `{"clauses": [...]}` or `{"error": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AnalysisResponse {
    /// Analysis succeeded
    Success(AnalysisResult),
    /// Analysis failed
    Failure {
        /// Failure details
        error: ErrorReport,
    },
}

impl From<Result<AnalysisResult, ExtractorError>> for AnalysisResponse {
    fn from(result: Result<AnalysisResult, ExtractorError>) -> Self {
        match result {
            Ok(result) => AnalysisResponse::Success(result),
            Err(error) => AnalysisResponse::Failure {
                error: ErrorReport::from(&error),
            },
        }
    }
}
