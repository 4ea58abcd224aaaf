//! Core Analyzer implementation

use crate::config::AnalyzerConfig;
use crate::error::ExtractorError;
use crate::parser::parse_llm_response;
use crate::prompt::PromptBuilder;
use clausescan_domain::{AnalysisResult, TextGenerator};
use clausescan_llm::GeminiProvider;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// The Analyzer turns document text into clause entries
///
/// Holds only immutable configuration and its generator, so a single
/// instance (behind an `Arc` if needed) can serve concurrent callers.
/// Dropping a pending `analyze` future cancels the upstream request.
#[derive(Debug)]
pub struct Analyzer<G> {
    generator: G,
    config: AnalyzerConfig,
}

impl Analyzer<GeminiProvider> {
    /// Build an Analyzer backed by the Gemini API
    ///
    /// Fails with [`ExtractorError::Config`] if the configuration is invalid
    /// or carries no API key. Nothing is sent in that case.
    pub fn from_config(config: AnalyzerConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;

        let provider = GeminiProvider::with_timeout(
            config.endpoint.clone(),
            config.api_key.clone(),
            config.request_timeout(),
        )?;

        info!(endpoint = %provider.endpoint(), "Configured Gemini provider");
        Ok(Self::new(provider, config))
    }
}

impl<G> Analyzer<G>
where
    G: TextGenerator,
    G::Error: Into<ExtractorError>,
{
    /// Create a new Analyzer
    pub fn new(generator: G, config: AnalyzerConfig) -> Self {
        Self { generator, config }
    }

    /// The configuration this Analyzer was built with
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// The underlying generator
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Build the prompt for a document without sending it
    ///
    /// Text that is empty after trimming counts as empty: whitespace-only
    /// documents fail with [`ExtractorError::EmptyDocument`] rather than
    /// being sent to the model.
    pub fn build_prompt(&self, document_text: &str) -> Result<String, ExtractorError> {
        if document_text.trim().is_empty() {
            warn!("Rejecting empty document");
            return Err(ExtractorError::EmptyDocument);
        }
        Ok(PromptBuilder::new(document_text).build())
    }

    /// Send a document to the model and return its raw reply
    ///
    /// Makes exactly one upstream call, or none if the document is empty.
    pub async fn analyze(&self, document_text: &str) -> Result<String, ExtractorError> {
        let prompt = self.build_prompt(document_text)?;

        info!(document_len = document_text.len(), "Starting clause analysis");
        debug!(prompt_len = prompt.len(), "Built analysis prompt");

        let reply = match timeout(self.config.request_timeout(), self.generator.generate(&prompt)).await {
            Ok(Ok(reply)) => reply,
            Ok(Err(e)) => {
                let error: ExtractorError = e.into();
                warn!(kind = %error.kind(), error = %error, "Upstream call failed");
                return Err(error);
            }
            Err(_) => {
                warn!(
                    timeout_secs = self.config.request_timeout_secs,
                    "Upstream call timed out"
                );
                return Err(ExtractorError::UpstreamTimeout(self.config.request_timeout_secs));
            }
        };

        debug!(reply_len = reply.len(), "Received model reply");
        debug!(reply = %reply, "Raw model reply");
        Ok(reply)
    }

    /// Parse a raw model reply using this Analyzer's schema mode
    pub fn parse(&self, raw_reply: &str) -> Result<AnalysisResult, ExtractorError> {
        let entries = parse_llm_response(raw_reply, self.config.schema_mode())?;
        Ok(AnalysisResult::new(entries))
    }

    /// Analyze a document end to end
    pub async fn analyze_document(&self, document_text: &str) -> Result<AnalysisResult, ExtractorError> {
        let reply = self.analyze(document_text).await?;
        let result = self.parse(&reply)?;

        let records = result.records().count();
        info!(
            entries = result.len(),
            records,
            "Analysis complete"
        );
        if records < result.len() {
            warn!(
                malformed = result.len() - records,
                "Some entries are not well-formed clause records"
            );
        }

        Ok(result)
    }
}
