use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

/// Placeholder used when `WHISPER_API_KEY` is unset
pub const PLACEHOLDER_API_KEY: &str = "YOUR_WHISPER_KEY";

/// Placeholder used when `WHISPER_API_ENDPOINT` is unset
pub const PLACEHOLDER_ENDPOINT: &str = "YOUR_WHISPER_ENDPOINT";

/// Upstream transcription provider
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderConfig {
    /// Bearer credential sent on every forwarded request
    #[serde(default = "default_api_key")]
    pub api_key: SecretString,
    /// Full URL of the transcription endpoint
    ///
    /// Kept as a plain string: an invalid URL is reported per request,
    /// not at startup.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Value of the `model` form field
    #[serde(default = "default_model")]
    pub model: String,
    /// Value of the `language` form field
    #[serde(default = "default_language")]
    pub language: String,
    /// Total timeout for one forwarded request (e.g. "120s", "2m")
    #[serde(default = "default_timeout")]
    pub timeout: String,
}

impl ProviderConfig {
    /// Whether either credential still holds its startup placeholder
    pub fn uses_placeholders(&self) -> bool {
        self.api_key.expose_secret() == PLACEHOLDER_API_KEY || self.endpoint == PLACEHOLDER_ENDPOINT
    }

    /// Parse the configured timeout
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a valid duration
    pub fn timeout_duration(&self) -> anyhow::Result<Duration> {
        duration_str::parse(&self.timeout)
            .map_err(|e| anyhow::anyhow!("invalid provider timeout '{}': {e}", self.timeout))
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: default_api_key(),
            endpoint: default_endpoint(),
            model: default_model(),
            language: default_language(),
            timeout: default_timeout(),
        }
    }
}

fn default_api_key() -> SecretString {
    SecretString::from(PLACEHOLDER_API_KEY)
}

fn default_endpoint() -> String {
    PLACEHOLDER_ENDPOINT.to_string()
}

fn default_model() -> String {
    "whisper-1".to_string()
}

fn default_language() -> String {
    "auto".to_string()
}

fn default_timeout() -> String {
    "120s".to_string()
}
