use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============= API Request Types =============

fn default_language() -> String {
    "auto".to_string()
}

fn default_level() -> String {
    "beginner".to_string()
}

fn default_learning_style() -> String {
    "visual".to_string()
}

fn default_summary_type() -> String {
    "concise".to_string()
}

fn default_doc_style() -> String {
    "comprehensive".to_string()
}

fn default_context() -> String {
    "general".to_string()
}

fn default_time_available() -> String {
    "1 month".to_string()
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ExplainCodeRequest {
    #[serde(default)]
    pub code: String,
    /// Language hint; "auto" lets the model infer it.
    #[serde(default = "default_language")]
    pub language: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TutorRequest {
    #[serde(default)]
    pub topic: String,
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default = "default_learning_style")]
    pub learning_style: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub content: String,
    #[serde(default = "default_summary_type")]
    pub summary_type: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DebugRequest {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub error_message: String,
    #[serde(default = "default_language")]
    pub language: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DocumentRequest {
    #[serde(default)]
    pub code: String,
    #[serde(default = "default_doc_style")]
    pub doc_style: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default = "default_context")]
    pub context: String,
    /// Conversation to continue; a new one is created when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LearningPathRequest {
    #[serde(default)]
    pub goal: String,
    #[serde(default = "default_level")]
    pub current_level: String,
    #[serde(default = "default_time_available")]
    pub time_available: String,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct ClearChatRequest {
    /// Session to clear; every session is cleared when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

// ============= API Response Types =============

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ExplainCodeResponse {
    pub explanation: String,
    pub success: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TutorResponse {
    pub lesson: String,
    pub success: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SummarizeResponse {
    pub summary: String,
    pub success: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DebugResponse {
    pub solution: String,
    pub success: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DocumentResponse {
    pub documentation: String,
    pub success: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatResponse {
    pub response: String,
    pub session_id: String,
    pub success: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LearningPathResponse {
    pub learning_path: String,
    pub success: bool,
}

/// Body returned with HTTP 200 when a generation feature fails.
///
/// Input validation failures use HTTP 400 instead; upstream and
/// configuration failures are reported in-body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FeatureErrorResponse {
    pub error: String,
    pub success: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ClearChatResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub api_configured: bool,
    pub timestamp: DateTime<Utc>,
}

// ============= Conversation Types =============

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: TurnRole,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Assistant,
}

impl TurnRole {
    /// Wire/prompt spelling of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            TurnRole::User => "user",
            TurnRole::Assistant => "assistant",
        }
    }
}

// ============= Error Types =============

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("API key not configured. Please add GROQ_API_KEY to .env file")]
    MissingApiKey,

    #[error("Rate limited by completion endpoint")]
    RateLimited,

    #[error("Completion attempts exhausted without a response")]
    AttemptsExhausted,

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            AppError::InvalidInput(_) => axum::http::StatusCode::BAD_REQUEST,
            AppError::MissingApiKey => axum::http::StatusCode::SERVICE_UNAVAILABLE,
            AppError::RateLimited => axum::http::StatusCode::TOO_MANY_REQUESTS,
            AppError::AttemptsExhausted | AppError::Llm(_) | AppError::Internal(_) => {
                axum::http::StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = serde_json::json!({
            "error": self.to_string()
        });

        (status, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_role_as_str() {
        assert_eq!(TurnRole::User.as_str(), "user");
        assert_eq!(TurnRole::Assistant.as_str(), "assistant");
    }

    #[test]
    fn test_turn_role_serializes_lowercase() {
        let turn = ChatTurn {
            role: TurnRole::Assistant,
            content: "hi".to_string(),
        };
        let json = serde_json::to_value(&turn).unwrap();
        assert_eq!(json["role"], "assistant");
    }

    #[test]
    fn test_request_defaults() {
        let request: TutorRequest = serde_json::from_str(r#"{"topic": "ownership"}"#).unwrap();
        assert_eq!(request.level, "beginner");
        assert_eq!(request.learning_style, "visual");

        let request: SummarizeRequest = serde_json::from_str(r#"{}"#).unwrap();
        assert!(request.content.is_empty());
        assert_eq!(request.summary_type, "concise");
    }

    #[test]
    fn test_missing_api_key_message_names_env_var() {
        assert!(AppError::MissingApiKey.to_string().contains("GROQ_API_KEY"));
    }
}
