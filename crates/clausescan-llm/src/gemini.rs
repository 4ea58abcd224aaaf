//! Gemini Provider Implementation
//!
//! Talks to Google's Gemini `generateContent` REST endpoint.
//!
//! # Wire format
//!
//! Request, sent as `POST <endpoint>?key=<api key>`:
//!
//! ```json
//! { "contents": [ { "parts": [ { "text": "<prompt>" } ] } ] }
//! ```
//!
//! Expected success envelope:
//!
//! ```json
//! { "candidates": [ { "content": { "parts": [ { "text": "<reply>" } ] } } ] }
//! ```
//!
//! The key travels as a query parameter because that is how the upstream API
//! authenticates. It is never logged; transport errors are stripped of their
//! URL before being reported.
//!
//! # Examples
//!
//! ```no_run
//! use clausescan_llm::{ApiKey, GeminiProvider};
//! use clausescan_llm::gemini::DEFAULT_ENDPOINT;
//!
//! let provider = GeminiProvider::new(DEFAULT_ENDPOINT, Some(ApiKey::new("my-key")))
//!     .expect("credential present");
//! ```

use crate::{ApiKey, LlmError};
use clausescan_domain::TextGenerator;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Default Gemini generateContent endpoint
pub const DEFAULT_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash-latest:generateContent";

/// Default timeout for a generate request (60 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Gemini API provider
///
/// Stateless apart from its configuration; one instance can serve many
/// concurrent callers.
#[derive(Debug, Clone)]
pub struct GeminiProvider {
    endpoint: String,
    api_key: ApiKey,
    timeout: Duration,
    client: reqwest::Client,
}

/// Request body for generateContent
#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: [RequestContent<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

impl<'a> GenerateContentRequest<'a> {
    fn from_prompt(prompt: &'a str) -> Self {
        Self {
            contents: [RequestContent {
                parts: [RequestPart { text: prompt }],
            }],
        }
    }
}

/// Response envelope from generateContent
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Option<Vec<Candidate>>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Option<Vec<ResponsePart>>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

impl GeminiProvider {
    /// Create a new Gemini provider with the default timeout
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::MissingCredential`] if `api_key` is absent or
    /// blank. No request is ever attempted without a key.
    pub fn new(endpoint: impl Into<String>, api_key: Option<ApiKey>) -> Result<Self, LlmError> {
        Self::with_timeout(endpoint, api_key, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a new Gemini provider with an explicit request timeout
    pub fn with_timeout(
        endpoint: impl Into<String>,
        api_key: Option<ApiKey>,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        let api_key = api_key
            .filter(|key| !key.is_blank())
            .ok_or_else(|| LlmError::MissingCredential("GEMINI_API_KEY is not set".to_string()))?;

        let endpoint = endpoint.into();
        if endpoint.trim().is_empty() {
            return Err(LlmError::Configuration("endpoint must not be empty".to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::Configuration(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoint,
            api_key,
            timeout,
            client,
        })
    }

    /// Endpoint this provider posts to (without the key)
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Generate text using the Gemini API
    ///
    /// Issues exactly one request. There is no retry: every failure is
    /// returned to the caller.
    ///
    /// # Errors
    ///
    /// - [`LlmError::Communication`] / [`LlmError::Timeout`] on transport failure
    /// - [`LlmError::Upstream`] on a non-success HTTP status
    /// - [`LlmError::InvalidResponse`] if the body is not the expected envelope
    pub async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        debug!(
            endpoint = %self.endpoint,
            prompt_len = prompt.len(),
            "Sending generateContent request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.expose())])
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "Gemini request failed");
            debug!(body = %body, "Gemini error body");
            return Err(LlmError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        debug!(status = status.as_u16(), body_len = body.len(), "Gemini request succeeded");
        extract_reply_text(&body)
    }

    fn transport_error(&self, error: reqwest::Error) -> LlmError {
        // The URL carries the key; drop it before the error can be displayed.
        let error = error.without_url();
        if error.is_timeout() {
            warn!(timeout_secs = self.timeout.as_secs(), "Gemini request timed out");
            LlmError::Timeout(self.timeout.as_secs())
        } else {
            warn!(error = %error, "Gemini request failed before a response");
            LlmError::Communication(error.to_string())
        }
    }
}

impl TextGenerator for GeminiProvider {
    type Error = LlmError;

    async fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        GeminiProvider::generate(self, prompt).await
    }
}

/// Pull `candidates[0].content.parts[0].text` out of a response body
fn extract_reply_text(body: &str) -> Result<String, LlmError> {
    let envelope: GenerateContentResponse = serde_json::from_str(body).map_err(|e| {
        debug!(body = %body, "Unparseable Gemini envelope");
        LlmError::InvalidResponse(format!("body is not a generateContent envelope: {}", e))
    })?;

    let candidate = match envelope.candidates.and_then(|c| c.into_iter().next()) {
        Some(candidate) => candidate,
        None => {
            let blocked = envelope
                .prompt_feedback
                .and_then(|feedback| feedback.block_reason);
            return Err(LlmError::InvalidResponse(match blocked {
                Some(reason) => format!("no candidates (prompt blocked: {})", reason),
                None => "no candidates".to_string(),
            }));
        }
    };

    let part = candidate
        .content
        .ok_or_else(|| LlmError::InvalidResponse("first candidate has no content".to_string()))?
        .parts
        .and_then(|parts| parts.into_iter().next())
        .ok_or_else(|| LlmError::InvalidResponse("candidate content has no parts".to_string()))?;

    part.text
        .ok_or_else(|| LlmError::InvalidResponse("first part has no text".to_string()))
}
