use std::path::Path;

use secrecy::SecretString;

use crate::{Config, PLACEHOLDER_API_KEY, PLACEHOLDER_ENDPOINT};

/// Environment variable holding the provider API key
pub const API_KEY_VAR: &str = "WHISPER_API_KEY";

/// Environment variable holding the provider endpoint URL
pub const ENDPOINT_VAR: &str = "WHISPER_API_ENDPOINT";

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, a placeholder cannot be
    /// resolved, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let expanded =
            crate::env::expand_env(&raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Build configuration from the process environment alone
    ///
    /// Reads `WHISPER_API_KEY` and `WHISPER_API_ENDPOINT`, falling back to
    /// placeholder values when unset. Everything else takes its default.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.provider.api_key =
            SecretString::from(std::env::var(API_KEY_VAR).unwrap_or_else(|_| PLACEHOLDER_API_KEY.to_string()));
        config.provider.endpoint = std::env::var(ENDPOINT_VAR).unwrap_or_else(|_| PLACEHOLDER_ENDPOINT.to_string());

        config
    }

    /// Validate that the configuration is usable
    ///
    /// # Errors
    ///
    /// Returns an error if the model is empty, the timeout is unparsable or
    /// zero, or the upload limit is zero
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.provider.model.trim().is_empty() {
            anyhow::bail!("provider.model must not be empty");
        }

        if self.provider.timeout_duration()?.is_zero() {
            anyhow::bail!("provider.timeout must be greater than zero");
        }

        if self.server.max_upload_bytes == 0 {
            anyhow::bail!("server.max_upload_bytes must be greater than zero");
        }

        Ok(())
    }
}
