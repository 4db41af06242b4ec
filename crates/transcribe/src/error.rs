use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RelayError>;

/// Everything that can go wrong while relaying one upload
#[derive(Debug, Error)]
pub enum RelayError {
    /// The request carried no `audio` field
    #[error("No audio file provided")]
    MissingAudio,

    /// The multipart body could not be read
    #[error("Invalid upload: {0}")]
    InvalidUpload(String),

    /// The provider answered with something other than 200
    #[error("Provider returned {status}: {body}")]
    Provider { status: u16, body: String },

    /// Building, sending, or decoding the provider request failed
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RelayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingAudio | Self::InvalidUpload(_) => StatusCode::BAD_REQUEST,
            Self::Provider { .. } | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short, stable summary placed in the `error` field
    pub fn error_message(&self) -> &'static str {
        match self {
            Self::MissingAudio => "No audio file provided",
            Self::InvalidUpload(_) => "Invalid upload",
            Self::Provider { .. } => "Transcription failed",
            Self::Internal(_) => "Internal server error",
        }
    }

    /// Free-form context placed in the `details` field
    ///
    /// Provider bodies are passed through verbatim.
    pub fn details(&self) -> Option<String> {
        match self {
            Self::MissingAudio => None,
            Self::InvalidUpload(details) | Self::Internal(details) => Some(details.clone()),
            Self::Provider { body, .. } => Some(body.clone()),
        }
    }

    /// Wrap a failure together with every error in its source chain
    ///
    /// `reqwest` keeps the useful part (refused connection, bad URL) in the
    /// sources rather than the top-level message.
    pub(crate) fn internal(err: &(dyn std::error::Error + 'static)) -> Self {
        let mut description = err.to_string();
        let mut source = err.source();

        while let Some(cause) = source {
            let text = cause.to_string();
            if !description.contains(&text) {
                description.push_str(": ");
                description.push_str(&text);
            }
            source = cause.source();
        }

        Self::Internal(description)
    }
}

/// JSON envelope returned for every failure
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: self.error_message().to_string(),
            details: self.details(),
        };

        (status, Json(body)).into_response()
    }
}
