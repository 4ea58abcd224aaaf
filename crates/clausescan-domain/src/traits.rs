//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use std::future::Future;

/// Trait for generative-text providers
///
/// Implemented by the infrastructure layer (clausescan-llm). A provider
/// issues exactly one request per call and never retries on its own.
pub trait TextGenerator {
    /// Error type for generation failures
    type Error;

    /// Send a prompt and return the model's raw text reply
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String, Self::Error>> + Send;
}
