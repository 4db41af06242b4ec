//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use relay_config::{Config, CorsConfig, ProviderConfig};
use secrecy::SecretString;

/// API key every test provider expects
pub const TEST_API_KEY: &str = "test-key";

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder bound to an ephemeral loopback port
    pub fn new() -> Self {
        let mut config = Config::default();
        config.server.listen_address = Some(SocketAddr::from(([127, 0, 0, 1], 0)));
        config.provider = ProviderConfig {
            api_key: SecretString::from(TEST_API_KEY),
            ..ProviderConfig::default()
        };

        Self { config }
    }

    /// Point the relay at a provider endpoint
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.config.provider.endpoint = endpoint.to_owned();
        self
    }

    /// Set the outbound request timeout (e.g. "250ms")
    pub fn with_timeout(mut self, timeout: &str) -> Self {
        self.config.provider.timeout = timeout.to_owned();
        self
    }

    /// Set the upload size limit
    pub fn with_max_upload_bytes(mut self, limit: usize) -> Self {
        self.config.server.max_upload_bytes = limit;
        self
    }

    /// Set CORS configuration
    pub fn with_cors(mut self, config: CorsConfig) -> Self {
        self.config.server.cors = config;
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
