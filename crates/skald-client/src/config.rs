//! Client configuration.

use skald_core::{defaults, Error, Result};

/// Configuration for the Skald API client.
#[derive(Debug, Clone)]
pub struct SkaldConfig {
    /// API key, sent as a bearer credential on every request.
    pub api_key: String,
    /// Base URL of the API endpoint.
    pub base_url: String,
    /// Per-request timeout in seconds. Expiry surfaces as a transient error.
    pub timeout_seconds: u64,
}

impl SkaldConfig {
    /// Configuration for the production endpoint with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: defaults::BASE_URL.to_string(),
            timeout_seconds: defaults::TIMEOUT_SECS,
        }
    }

    /// Point the client at a different endpoint (self-hosted or staging).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the per-request timeout.
    pub fn with_timeout_seconds(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// Create from environment variables.
    ///
    /// Reads `SKALD_API_KEY` (required), `SKALD_BASE_URL`, and
    /// `SKALD_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("SKALD_API_KEY")
            .map_err(|_| Error::Config("SKALD_API_KEY is not set".to_string()))?;

        let base_url =
            std::env::var("SKALD_BASE_URL").unwrap_or_else(|_| defaults::BASE_URL.to_string());

        let timeout_seconds = std::env::var("SKALD_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults::TIMEOUT_SECS);

        Ok(Self {
            api_key,
            base_url,
            timeout_seconds,
        })
    }
}
