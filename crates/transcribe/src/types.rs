use serde::{Deserialize, Serialize};

/// MIME type assumed when the upload part does not declare one
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Audio file taken from the `audio` field of an incoming request
#[derive(Debug, Clone)]
pub struct AudioUpload {
    /// Raw file bytes, forwarded untouched
    pub data: Vec<u8>,
    /// Filename supplied by the client
    pub filename: String,
    /// MIME type supplied by the client
    pub content_type: String,
}

/// Successful transcription returned to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptionResponse {
    pub text: String,
}
