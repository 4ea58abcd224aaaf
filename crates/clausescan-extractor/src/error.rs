//! Error types for the Extractor

use crate::types::ErrorKind;
use clausescan_llm::LlmError;
use thiserror::Error;

/// Errors that can occur during analysis
///
/// Every variant is terminal for the current request; nothing is retried.
/// Use [`ExtractorError::kind`] for a stable classification.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Document text was empty; no request was made
    #[error("Document is empty")]
    EmptyDocument,

    /// Transport failure or non-success status from the generative endpoint
    #[error("Upstream error: {}", describe_upstream(.status, .body))]
    Upstream {
        /// HTTP status, if one was received
        status: Option<u16>,
        /// Response body, or the transport error message
        body: String,
    },

    /// Upstream did not answer within the configured timeout
    #[error("Upstream error: timed out after {0}s")]
    UpstreamTimeout(u64),

    /// Upstream answered 200 with an unexpected envelope
    #[error("Unexpected upstream response: {0}")]
    UpstreamResponseShape(String),

    /// Model reply contained no `[` or no `]`
    #[error("Extraction format error: no array found")]
    NoArrayFound,

    /// Bracketed slice of the model reply was not valid JSON
    #[error("Extraction format error: invalid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// Strict mode only: an element was not a clause record
    #[error("Extraction format error: element {index} is not a clause record: {reason}")]
    SchemaMismatch {
        /// Position of the offending element
        index: usize,
        /// What was wrong with it
        reason: String,
    },

    /// Invalid or incomplete configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ExtractorError {
    /// Stable machine-checkable kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExtractorError::EmptyDocument => ErrorKind::EmptyDocument,
            ExtractorError::Upstream { .. } | ExtractorError::UpstreamTimeout(_) => ErrorKind::Upstream,
            ExtractorError::UpstreamResponseShape(_) => ErrorKind::UpstreamResponseShape,
            ExtractorError::NoArrayFound
            | ExtractorError::InvalidJson(_)
            | ExtractorError::SchemaMismatch { .. } => ErrorKind::ExtractionFormat,
            ExtractorError::Config(_) => ErrorKind::Config,
        }
    }

    /// HTTP status returned by the upstream, if any
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            ExtractorError::Upstream { status, .. } => *status,
            _ => None,
        }
    }

    /// Raw upstream body for diagnostics, if any
    pub fn upstream_body(&self) -> Option<&str> {
        match self {
            ExtractorError::Upstream {
                status: Some(_),
                body,
            } => Some(body),
            _ => None,
        }
    }
}

fn describe_upstream(status: &Option<u16>, body: &str) -> String {
    match status {
        Some(status) => format!("HTTP {}", status),
        None => body.to_string(),
    }
}

impl From<LlmError> for ExtractorError {
    fn from(e: LlmError) -> Self {
        match e {
            LlmError::MissingCredential(msg) | LlmError::Configuration(msg) => {
                ExtractorError::Config(msg)
            }
            LlmError::Communication(msg) => ExtractorError::Upstream {
                status: None,
                body: msg,
            },
            LlmError::Timeout(secs) => ExtractorError::UpstreamTimeout(secs),
            LlmError::Upstream { status, body } => ExtractorError::Upstream {
                status: Some(status),
                body,
            },
            LlmError::InvalidResponse(msg) => ExtractorError::UpstreamResponseShape(msg),
        }
    }
}
