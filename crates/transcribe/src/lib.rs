#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions
)]

mod error;
mod http_client;
mod provider;
mod request;
mod server;
mod types;

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, State},
    routing::post,
};

pub use error::{ErrorResponse, RelayError, Result};
pub use provider::Transcriber;
pub use request::{AUDIO_FIELD, ExtractAudio};
pub use server::{Server, ServerBuilder};
pub use types::{AudioUpload, DEFAULT_CONTENT_TYPE, TranscriptionResponse};

/// Build the relay state from configuration
///
/// # Errors
///
/// Returns an error if the timeout is invalid or the HTTP client fails to build
pub fn build_server(config: &relay_config::Config) -> anyhow::Result<Arc<Server>> {
    let server = Arc::new(
        ServerBuilder::new(config)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to initialize transcription relay: {e}"))?,
    );
    Ok(server)
}

/// Create the endpoint router for the relay
///
/// axum's default 2 MiB body limit is lifted here; [`ExtractAudio`] enforces
/// the configured upload limit itself.
pub fn endpoint_router() -> Router<Arc<Server>> {
    Router::new().route("/transcribe", post(transcribe).layer(DefaultBodyLimit::disable()))
}

/// Handle transcription requests
async fn transcribe(
    State(server): State<Arc<Server>>,
    ExtractAudio(upload): ExtractAudio,
) -> Result<Json<TranscriptionResponse>> {
    let response = server.transcribe(upload).await?;

    Ok(Json(response))
}
