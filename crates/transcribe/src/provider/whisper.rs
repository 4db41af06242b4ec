use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, multipart};
use secrecy::{ExposeSecret, SecretString};

use crate::{
    error::RelayError,
    http_client::http_client,
    types::{AudioUpload, TranscriptionResponse},
};

use super::Transcriber;

/// Client for a Whisper-compatible transcription endpoint
pub(crate) struct WhisperClient {
    client: Client,
    endpoint: String,
    api_key: SecretString,
    model: String,
    language: String,
}

impl WhisperClient {
    pub fn new(config: &relay_config::ProviderConfig, timeout: Duration) -> anyhow::Result<Self> {
        let client = http_client(timeout).map_err(|e| anyhow::anyhow!("failed to build HTTP client: {e}"))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            language: config.language.clone(),
        })
    }

    fn form(&self, upload: AudioUpload) -> crate::error::Result<multipart::Form> {
        let AudioUpload {
            data,
            filename,
            content_type,
        } = upload;

        let file = multipart::Part::bytes(data)
            .file_name(filename)
            .mime_str(&content_type)
            .map_err(|e| RelayError::internal(&e))?;

        Ok(multipart::Form::new()
            .part("file", file)
            .text("model", self.model.clone())
            .text("language", self.language.clone()))
    }
}

/// Success body; anything besides `text` is ignored
#[derive(serde::Deserialize)]
struct WhisperResponse {
    #[serde(default)]
    text: Option<String>,
}

#[async_trait]
impl Transcriber for WhisperClient {
    async fn transcribe(&self, upload: AudioUpload) -> crate::error::Result<TranscriptionResponse> {
        let bytes = upload.data.len();
        let form = self.form(upload)?;

        tracing::info!(
            endpoint = %self.endpoint,
            bytes,
            model = %self.model,
            "sending audio to transcription provider"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(self.api_key.expose_secret())
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                let err = RelayError::internal(&e);
                tracing::error!("transcription request failed: {err}");
                err
            })?;

        let status = response.status();
        tracing::info!(%status, "transcription provider responded");

        let body = response.text().await.map_err(|e| {
            let err = RelayError::internal(&e);
            tracing::error!("failed to read provider response: {err}");
            err
        })?;

        if status != StatusCode::OK {
            tracing::error!(%status, body = %body, "transcription provider returned an error");

            return Err(RelayError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        let result: WhisperResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::error!("failed to parse provider response: {e}");
            RelayError::Internal(format!("invalid provider response: {e}"))
        })?;

        let text = result.text.unwrap_or_default();
        tracing::debug!(chars = text.chars().count(), "transcription complete");

        Ok(TranscriptionResponse { text })
    }

    fn name(&self) -> &str {
        "whisper"
    }
}
