use relay_config::Config;

use crate::{
    provider::{Transcriber, whisper::WhisperClient},
    types::{AudioUpload, TranscriptionResponse},
};

/// Relay state shared by every request
pub struct Server {
    transcriber: Box<dyn Transcriber>,
    max_upload_bytes: usize,
}

impl Server {
    /// Wrap an arbitrary transcriber
    pub fn new(transcriber: Box<dyn Transcriber>, max_upload_bytes: usize) -> Self {
        Self {
            transcriber,
            max_upload_bytes,
        }
    }

    pub(crate) fn max_upload_bytes(&self) -> usize {
        self.max_upload_bytes
    }

    pub(crate) async fn transcribe(&self, upload: AudioUpload) -> crate::error::Result<TranscriptionResponse> {
        tracing::debug!(provider = self.transcriber.name(), "forwarding upload");
        self.transcriber.transcribe(upload).await
    }
}

/// Builder for constructing the relay from configuration
pub struct ServerBuilder<'a> {
    config: &'a Config,
}

impl<'a> ServerBuilder<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    pub fn build(self) -> anyhow::Result<Server> {
        let provider = &self.config.provider;
        let timeout = provider.timeout_duration()?;

        tracing::debug!(
            endpoint = %provider.endpoint,
            model = %provider.model,
            language = %provider.language,
            timeout_secs = timeout.as_secs_f64(),
            "initializing transcription provider"
        );

        let client = WhisperClient::new(provider, timeout)?;

        Ok(Server::new(Box::new(client), self.config.server.max_upload_bytes))
    }
}
