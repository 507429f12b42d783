use crate::{
    features::{
        CodeExplainer, ContentSummarizer, DebugHelper, DocGenerator, LearningPathPlanner,
        TopicTutor,
    },
    types::{
        AppError, DebugRequest, DebugResponse, DocumentRequest, DocumentResponse,
        ExplainCodeRequest, ExplainCodeResponse, LearningPathRequest, LearningPathResponse,
        Result, SummarizeRequest, SummarizeResponse, TutorRequest, TutorResponse,
    },
    AppState,
};
use axum::{extract::State, response::Response, Json};

use super::feature_response;

/// Explain code in beginner-friendly terms
#[utoipa::path(
    post,
    path = "/api/explain-code",
    request_body = ExplainCodeRequest,
    responses(
        (status = 200, description = "Explanation or in-body generation error", body = ExplainCodeResponse),
        (status = 400, description = "No code provided")
    ),
    tag = "features"
)]
pub async fn explain_code(
    State(state): State<AppState>,
    Json(payload): Json<ExplainCodeRequest>,
) -> Result<Response> {
    if payload.code.is_empty() {
        return Err(AppError::InvalidInput("No code provided".to_string()));
    }

    let outcome = match state.llm_factory.create() {
        Ok(llm) => {
            CodeExplainer::new(llm)
                .run(&payload.code, &payload.language)
                .await
        }
        Err(e) => Err(e),
    };

    Ok(feature_response(outcome.map(|explanation| {
        ExplainCodeResponse {
            explanation,
            success: true,
        }
    })))
}

/// Personalized lesson on a topic
#[utoipa::path(
    post,
    path = "/api/tutor",
    request_body = TutorRequest,
    responses(
        (status = 200, description = "Lesson or in-body generation error", body = TutorResponse),
        (status = 400, description = "No topic provided")
    ),
    tag = "features"
)]
pub async fn tutor(
    State(state): State<AppState>,
    Json(payload): Json<TutorRequest>,
) -> Result<Response> {
    if payload.topic.is_empty() {
        return Err(AppError::InvalidInput("No topic provided".to_string()));
    }

    let outcome = match state.llm_factory.create() {
        Ok(llm) => {
            TopicTutor::new(llm)
                .run(&payload.topic, &payload.level, &payload.learning_style)
                .await
        }
        Err(e) => Err(e),
    };

    Ok(feature_response(outcome.map(|lesson| TutorResponse {
        lesson,
        success: true,
    })))
}

/// Summarize content in a chosen style
#[utoipa::path(
    post,
    path = "/api/summarize",
    request_body = SummarizeRequest,
    responses(
        (status = 200, description = "Summary or in-body generation error", body = SummarizeResponse),
        (status = 400, description = "No content provided")
    ),
    tag = "features"
)]
pub async fn summarize(
    State(state): State<AppState>,
    Json(payload): Json<SummarizeRequest>,
) -> Result<Response> {
    if payload.content.is_empty() {
        return Err(AppError::InvalidInput("No content provided".to_string()));
    }

    let outcome = match state.llm_factory.create() {
        Ok(llm) => {
            ContentSummarizer::new(llm)
                .run(&payload.content, &payload.summary_type)
                .await
        }
        Err(e) => Err(e),
    };

    Ok(feature_response(outcome.map(|summary| SummarizeResponse {
        summary,
        success: true,
    })))
}

/// Diagnose code plus an error message
#[utoipa::path(
    post,
    path = "/api/debug",
    request_body = DebugRequest,
    responses(
        (status = 200, description = "Solution or in-body generation error", body = DebugResponse),
        (status = 400, description = "Code and error message required")
    ),
    tag = "features"
)]
pub async fn debug(
    State(state): State<AppState>,
    Json(payload): Json<DebugRequest>,
) -> Result<Response> {
    if payload.code.is_empty() || payload.error_message.is_empty() {
        return Err(AppError::InvalidInput(
            "Code and error message required".to_string(),
        ));
    }

    let outcome = match state.llm_factory.create() {
        Ok(llm) => {
            DebugHelper::new(llm)
                .run(&payload.code, &payload.error_message, &payload.language)
                .await
        }
        Err(e) => Err(e),
    };

    Ok(feature_response(outcome.map(|solution| DebugResponse {
        solution,
        success: true,
    })))
}

/// Generate documentation for code
#[utoipa::path(
    post,
    path = "/api/document",
    request_body = DocumentRequest,
    responses(
        (status = 200, description = "Documentation or in-body generation error", body = DocumentResponse),
        (status = 400, description = "No code provided")
    ),
    tag = "features"
)]
pub async fn document(
    State(state): State<AppState>,
    Json(payload): Json<DocumentRequest>,
) -> Result<Response> {
    if payload.code.is_empty() {
        return Err(AppError::InvalidInput("No code provided".to_string()));
    }

    let outcome = match state.llm_factory.create() {
        Ok(llm) => {
            DocGenerator::new(llm)
                .run(&payload.code, &payload.doc_style)
                .await
        }
        Err(e) => Err(e),
    };

    Ok(feature_response(outcome.map(|documentation| {
        DocumentResponse {
            documentation,
            success: true,
        }
    })))
}

/// Structured learning roadmap toward a goal
#[utoipa::path(
    post,
    path = "/api/learning-path",
    request_body = LearningPathRequest,
    responses(
        (status = 200, description = "Learning path or in-body generation error", body = LearningPathResponse),
        (status = 400, description = "No learning goal provided")
    ),
    tag = "features"
)]
pub async fn learning_path(
    State(state): State<AppState>,
    Json(payload): Json<LearningPathRequest>,
) -> Result<Response> {
    if payload.goal.is_empty() {
        return Err(AppError::InvalidInput(
            "No learning goal provided".to_string(),
        ));
    }

    let outcome = match state.llm_factory.create() {
        Ok(llm) => {
            LearningPathPlanner::new(llm)
                .run(&payload.goal, &payload.current_level, &payload.time_available)
                .await
        }
        Err(e) => Err(e),
    };

    Ok(feature_response(outcome.map(|learning_path| {
        LearningPathResponse {
            learning_path,
            success: true,
        }
    })))
}
