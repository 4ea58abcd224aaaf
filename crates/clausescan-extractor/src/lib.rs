//! Clausescan Extractor
//!
//! Finds critical clauses in legal documents using a generative-text model.
//!
//! # Overview
//!
//! The Analyzer embeds document text in a fixed prompt, sends it to the model
//! in a single request, and carves the JSON array of clauses out of the
//! model's free-text reply.
//!
//! # Architecture
//!
//! ```text
//! Text → Analyzer (gateway) → TextGenerator → raw reply → parser → AnalysisResult
//! ```
//!
//! # Key Features
//!
//! - **Single round trip**: one request per document, no retries
//! - **Tolerant carving**: prose and code fences around the array are ignored
//! - **Typed failures**: every error has a stable [`ErrorKind`]
//! - **Optional strict schema**: reject elements that are not clause records
//!
//! # Example Usage
//!
//! ```no_run
//! use clausescan_extractor::{Analyzer, AnalyzerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AnalyzerConfig::default().with_env_overrides()?;
//! let analyzer = Analyzer::from_config(config)?;
//!
//! let result = analyzer
//!     .analyze_document("The Supplier's liability is capped at fees paid.")
//!     .await?;
//!
//! for record in result.records() {
//!     println!("{}: {}", record.category, record.explanation);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod analyzer;
mod config;
mod error;
mod parser;
mod prompt;
mod types;

#[cfg(test)]
mod tests;

pub use analyzer::Analyzer;
pub use config::{
    AnalyzerConfig, DEFAULT_MAX_UPLOAD_BYTES, ENV_API_KEY, ENV_ENDPOINT, ENV_TIMEOUT_SECS,
};
pub use error::ExtractorError;
pub use parser::{extract_clauses, parse_llm_response};
pub use prompt::{PromptBuilder, DOCUMENT_DELIMITER};
pub use types::{AnalysisResponse, ErrorKind, ErrorReport, SchemaMode};
