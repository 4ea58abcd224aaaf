//! API credential handling

use serde::Deserialize;
use std::fmt;

/// An API key that never shows up in logs or debug output
///
/// Deserializes from a plain string. It deliberately has no `Serialize` or
/// `Display` impl; call [`ApiKey::expose`] at the single place the key is sent.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a raw key
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw key
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Whether the key is empty or whitespace
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}
