use std::sync::Arc;

use axum::{
    body::Body,
    extract::{FromRequest, Multipart},
};

use crate::{
    error::RelayError,
    server::Server,
    types::{AudioUpload, DEFAULT_CONTENT_TYPE},
};

/// Name of the multipart field carrying the audio file
pub const AUDIO_FIELD: &str = "audio";

/// Extractor for the `audio` part of a multipart upload
pub struct ExtractAudio(pub AudioUpload);

impl FromRequest<Arc<Server>> for ExtractAudio {
    type Rejection = RelayError;

    async fn from_request(request: http::Request<Body>, server: &Arc<Server>) -> Result<Self, Self::Rejection> {
        tracing::info!("received transcription request");

        let (parts, body) = request.into_parts();

        let is_multipart = parts
            .headers
            .get(http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("multipart/form-data"));

        // A non-multipart body cannot carry files at all
        if !is_multipart {
            tracing::warn!("request is not multipart/form-data, no audio file provided");
            return Err(RelayError::MissingAudio);
        }

        let bytes = axum::body::to_bytes(body, server.max_upload_bytes())
            .await
            .map_err(|e| {
                tracing::warn!("failed to read upload body: {e}");
                RelayError::InvalidUpload(format!("failed to read request body: {e}"))
            })?;

        let rebuilt = http::Request::from_parts(parts, Body::from(bytes));

        let mut multipart = Multipart::from_request(rebuilt, &())
            .await
            .map_err(|e| RelayError::InvalidUpload(format!("failed to parse multipart form: {e}")))?;

        let mut seen = Vec::new();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| RelayError::InvalidUpload(format!("failed to parse multipart form: {e}")))?
        {
            let name = field.name().unwrap_or_default().to_string();

            // Only file parts count; a plain text field named `audio` is not an upload
            let filename = match field.file_name() {
                Some(filename) if name == AUDIO_FIELD => filename.to_string(),
                _ => {
                    seen.push(name);
                    continue;
                }
            };

            let content_type = field.content_type().unwrap_or(DEFAULT_CONTENT_TYPE).to_string();

            let data = field
                .bytes()
                .await
                .map_err(|e| RelayError::InvalidUpload(format!("failed to read audio data: {e}")))?
                .to_vec();

            tracing::info!(
                filename = %filename,
                content_type = %content_type,
                bytes = data.len(),
                "audio file received"
            );

            return Ok(Self(AudioUpload {
                data,
                filename,
                content_type,
            }));
        }

        tracing::warn!(fields = ?seen, "no audio file provided");
        Err(RelayError::MissingAudio)
    }
}
