//! Configuration for the Analyzer

use crate::types::SchemaMode;
use clausescan_llm::gemini::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};
use clausescan_llm::ApiKey;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable holding the Gemini API key
pub const ENV_API_KEY: &str = "GEMINI_API_KEY";

/// Environment variable overriding the endpoint
pub const ENV_ENDPOINT: &str = "CLAUSESCAN_ENDPOINT";

/// Environment variable overriding the request timeout (seconds)
pub const ENV_TIMEOUT_SECS: &str = "CLAUSESCAN_TIMEOUT_SECS";

/// Default upload cap (10 MiB)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Configuration for the Analyzer
///
/// The API key is read from configuration or the environment but is never
/// written back out: it is skipped when serializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Full URL of the generateContent endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// API credential, sent as the `key` query parameter
    #[serde(default, skip_serializing)]
    pub api_key: Option<ApiKey>,

    /// Maximum time for the upstream call (seconds)
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Largest accepted upload (bytes)
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,

    /// Require every parsed element to be a clause record
    #[serde(default)]
    pub strict_schema: bool,
}

impl AnalyzerConfig {
    /// Get the request timeout as a Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Parser strictness implied by `strict_schema`
    pub fn schema_mode(&self) -> SchemaMode {
        if self.strict_schema {
            SchemaMode::Strict
        } else {
            SchemaMode::Permissive
        }
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(ApiKey::new(api_key));
        self
    }

    /// Validate the configuration
    ///
    /// The credential is not checked here; a missing key is reported when
    /// the provider is built.
    pub fn validate(&self) -> Result<(), String> {
        let endpoint = self.endpoint.trim();
        if endpoint.is_empty() {
            return Err("endpoint must not be empty".to_string());
        }
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(format!("endpoint must be an http(s) URL, got '{}'", endpoint));
        }
        if self.request_timeout_secs == 0 {
            return Err("request_timeout_secs must be greater than 0".to_string());
        }
        if self.max_upload_bytes == 0 {
            return Err("max_upload_bytes must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Apply overrides from the process environment
    pub fn with_env_overrides(self) -> Result<Self, String> {
        self.with_overrides_from(|name| std::env::var(name).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    ///
    /// Empty values are ignored.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        if let Some(key) = get(ENV_API_KEY) {
            self.api_key = Some(ApiKey::new(key));
        }
        if let Some(endpoint) = get(ENV_ENDPOINT) {
            self.endpoint = endpoint;
        }
        if let Some(timeout) = get(ENV_TIMEOUT_SECS) {
            self.request_timeout_secs = timeout
                .trim()
                .parse()
                .map_err(|e| format!("{} must be a number of seconds: {}", ENV_TIMEOUT_SECS, e))?;
        }
        Ok(self)
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string (without the API key)
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: None,
            request_timeout_secs: default_timeout_secs(),
            max_upload_bytes: default_max_upload_bytes(),
            strict_schema: false,
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_max_upload_bytes() -> usize {
    DEFAULT_MAX_UPLOAD_BYTES
}
