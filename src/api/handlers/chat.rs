use crate::{
    features::ChatAssistant,
    types::{AppError, ChatRequest, ChatResponse, ClearChatRequest, ClearChatResponse, Result},
    AppState,
};
use axum::{extract::State, response::Response, Json};
use uuid::Uuid;

use super::feature_response;

/// Chat with the learning assistant
#[utoipa::path(
    post,
    path = "/api/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Assistant reply or in-body generation error", body = ChatResponse),
        (status = 400, description = "No message provided")
    ),
    tag = "chat"
)]
pub async fn chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Response> {
    if payload.message.is_empty() {
        return Err(AppError::InvalidInput("No message provided".to_string()));
    }

    // Continue the caller's conversation, or start a fresh one.
    let session_id = payload
        .session_id
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let outcome = match state.llm_factory.create() {
        Ok(llm) => {
            ChatAssistant::new(llm, state.sessions.clone())
                .run(&session_id, &payload.message, &payload.context)
                .await
        }
        Err(e) => Err(e),
    };

    Ok(feature_response(outcome.map(|response| ChatResponse {
        response,
        session_id,
        success: true,
    })))
}

/// Clear chat history
#[utoipa::path(
    post,
    path = "/api/clear-chat",
    request_body = ClearChatRequest,
    responses(
        (status = 200, description = "History cleared", body = ClearChatResponse)
    ),
    tag = "chat"
)]
pub async fn clear_chat(
    State(state): State<AppState>,
    body: axum::body::Bytes,
) -> Json<ClearChatResponse> {
    // The browser client may POST an empty body; only a well-formed JSON
    // body can name a single session to clear.
    let session_id = serde_json::from_slice::<ClearChatRequest>(&body)
        .ok()
        .and_then(|request| request.session_id);

    match session_id {
        Some(session_id) => {
            state.sessions.clear(&session_id);
        }
        None => state.sessions.clear_all(),
    }

    Json(ClearChatResponse {
        success: true,
        message: "Chat history cleared".to_string(),
    })
}
