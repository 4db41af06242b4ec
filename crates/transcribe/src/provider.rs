pub(crate) mod whisper;

use async_trait::async_trait;

use crate::types::{AudioUpload, TranscriptionResponse};

/// Something that turns an uploaded audio file into text
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Forward the upload and map the outcome
    async fn transcribe(&self, upload: AudioUpload) -> crate::error::Result<TranscriptionResponse>;

    /// Name used in log events
    fn name(&self) -> &str;
}
