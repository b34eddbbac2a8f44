use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::state::AppState;
use crate::analysis::Tweet;
use crate::error::ProcessError;

pub async fn tweet(
    State(state): State<AppState>,
    Json(tweet): Json<Tweet>,
) -> Result<StatusCode, ProcessError> {
    state.processor.process(tweet).await?;
    Ok(StatusCode::OK)
}

/// Liveness probe. Never touches the sidecar.
pub async fn health() -> StatusCode {
    StatusCode::OK
}
