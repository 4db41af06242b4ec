use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Transcription relay
#[derive(Debug, Parser)]
#[command(name = "relay", about = "Relay audio uploads to a Whisper-compatible transcription API")]
pub struct Args {
    /// Path to a TOML configuration file
    ///
    /// Without one, the provider is configured from WHISPER_API_KEY and
    /// WHISPER_API_ENDPOINT.
    #[arg(short, long, env = "RELAY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the listen address
    #[arg(long, env = "RELAY_LISTEN")]
    pub listen: Option<SocketAddr>,
}
