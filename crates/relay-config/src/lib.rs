#![allow(clippy::must_use_candidate)]

pub mod cors;
mod env;
mod loader;
pub mod log;
pub mod provider;
pub mod server;

use serde::Deserialize;

pub use cors::*;
pub use log::*;
pub use provider::*;
pub use server::*;

/// Top-level relay configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Listener and middleware configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Upstream transcription provider
    #[serde(default)]
    pub provider: ProviderConfig,
    /// Log output configuration
    #[serde(default)]
    pub log: LogConfig,
}
