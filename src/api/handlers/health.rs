use crate::{types::HealthResponse, AppState};
use axum::{extract::State, Json};
use chrono::Utc;

/// Health check
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Server health and credential status", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        api_configured: state.config.llm.api_key_configured(),
        timestamp: Utc::now(),
    })
}
