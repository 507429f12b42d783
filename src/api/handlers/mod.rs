//! API request handlers.

/// Session chat and history-clearing handlers.
pub mod chat;
/// Generation feature handlers (explain, tutor, summarize, debug, document,
/// learning-path).
pub mod features;
/// Health check handler.
pub mod health;

use crate::types::{FeatureErrorResponse, Result};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Fold a generation outcome into the wire shape: the feature body on
/// success, `{"error", "success": false}` on failure - both HTTP 200.
pub(crate) fn feature_response<T: Serialize>(outcome: Result<T>) -> Response {
    match outcome {
        Ok(body) => Json(body).into_response(),
        Err(err) => {
            tracing::warn!(error = %err, "generation failed");
            Json(FeatureErrorResponse {
                error: err.to_string(),
                success: false,
            })
            .into_response()
        }
    }
}
