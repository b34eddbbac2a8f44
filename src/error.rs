//! Failures of the tweet ingest pipeline and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    /// The sentiment service could not be reached or answered with garbage.
    #[error("sentiment classification failed: {0:#}")]
    Classification(anyhow::Error),

    #[error("state save failed: {0:#}")]
    StateSave(anyhow::Error),

    #[error("publish failed: {0:#}")]
    Publish(anyhow::Error),

    #[error("serialization error: {0}")]
    Encode(#[from] serde_json::Error),
}

impl IntoResponse for ProcessError {
    fn into_response(self) -> Response {
        // Details are already logged by the processor; the caller only gets the status.
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
