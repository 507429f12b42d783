use crate::llm::client::LlmClient;
use crate::types::{AppError, Result};
use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessage,
        ChatCompletionRequestUserMessageContent, CreateChatCompletionRequest,
    },
    Client,
};
use async_trait::async_trait;

/// Default completion endpoint (Groq's OpenAI-compatible API).
pub const GROQ_API_BASE: &str = "https://api.groq.com/openai/v1";

/// Default model served by the endpoint.
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Client for any OpenAI-compatible chat-completion endpoint.
pub struct OpenAiCompatClient {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiCompatClient {
    pub fn new(api_key: String, api_base: String, model: String) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(api_base);

        // async-openai ships its own exponential backoff for 429s; a zero
        // max_elapsed_time policy makes it give up immediately so that all
        // retry decisions stay in crate::llm::retry.
        let no_retry = backoff::ExponentialBackoff {
            max_elapsed_time: Some(std::time::Duration::ZERO),
            ..Default::default()
        };

        Self {
            client: Client::with_config(config).with_backoff(no_retry),
            model,
        }
    }
}

#[async_trait]
impl LlmClient for OpenAiCompatClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let request = CreateChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatCompletionRequestMessage::User(
                ChatCompletionRequestUserMessage {
                    content: ChatCompletionRequestUserMessageContent::Text(prompt.to_string()),
                    name: None,
                },
            )],
            ..Default::default()
        };

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(map_openai_error)?;

        response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| AppError::Llm("No response from completion endpoint".to_string()))
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

/// Map an [`OpenAIError`] to an [`AppError`].
///
/// Rate-limit classification is structural (error code/type or HTTP 429),
/// never a substring match on the rendered message.
fn map_openai_error(err: OpenAIError) -> AppError {
    match &err {
        OpenAIError::ApiError(api_err) => {
            let code = api_err.code.as_deref().unwrap_or("");
            let error_type = api_err.r#type.as_deref().unwrap_or("");

            if code == "rate_limit_exceeded" || error_type == "rate_limit_error" {
                AppError::RateLimited
            } else {
                AppError::Llm(format!("Completion API error: {}", api_err.message))
            }
        }
        OpenAIError::Reqwest(reqwest_err) => {
            if reqwest_err.status().map(|s| s.as_u16()) == Some(429) {
                AppError::RateLimited
            } else {
                AppError::Llm(format!("Completion request failed: {}", err))
            }
        }
        _ => AppError::Llm(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_openai::error::ApiError;

    #[test]
    fn test_map_rate_limit_code() {
        let err = OpenAIError::ApiError(ApiError {
            message: "Rate limit reached for model".to_string(),
            r#type: Some("tokens".to_string()),
            param: None,
            code: Some("rate_limit_exceeded".to_string()),
        });
        assert!(matches!(map_openai_error(err), AppError::RateLimited));
    }

    #[test]
    fn test_map_rate_limit_type() {
        let err = OpenAIError::ApiError(ApiError {
            message: "slow down".to_string(),
            r#type: Some("rate_limit_error".to_string()),
            param: None,
            code: None,
        });
        assert!(matches!(map_openai_error(err), AppError::RateLimited));
    }

    #[test]
    fn test_map_other_api_error_keeps_message() {
        let err = OpenAIError::ApiError(ApiError {
            message: "Invalid API key provided".to_string(),
            r#type: Some("invalid_request_error".to_string()),
            param: None,
            code: Some("invalid_api_key".to_string()),
        });
        match map_openai_error(err) {
            AppError::Llm(message) => assert!(message.contains("Invalid API key provided")),
            other => panic!("expected Llm error, got {:?}", other),
        }
    }

    #[test]
    fn test_map_invalid_argument() {
        let err = OpenAIError::InvalidArgument("bad argument".to_string());
        assert!(matches!(map_openai_error(err), AppError::Llm(_)));
    }
}
