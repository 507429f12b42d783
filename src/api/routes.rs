use crate::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/explain-code",
            post(crate::api::handlers::features::explain_code),
        )
        .route("/api/tutor", post(crate::api::handlers::features::tutor))
        .route(
            "/api/summarize",
            post(crate::api::handlers::features::summarize),
        )
        .route("/api/debug", post(crate::api::handlers::features::debug))
        .route(
            "/api/document",
            post(crate::api::handlers::features::document),
        )
        .route(
            "/api/learning-path",
            post(crate::api::handlers::features::learning_path),
        )
        .route("/api/chat", post(crate::api::handlers::chat::chat))
        .route(
            "/api/clear-chat",
            post(crate::api::handlers::chat::clear_chat),
        )
        .route("/api/health", get(crate::api::handlers::health::health))
}
