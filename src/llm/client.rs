use crate::types::{AppError, Result};
use crate::utils::config::LlmConfig;
use async_trait::async_trait;
use std::sync::Arc;

/// Generic completion client trait.
///
/// The server only ever sends a fully rendered prompt as a single user
/// message and reads back one completion, so the surface is deliberately
/// small.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Generate a completion from a prompt (non-streaming).
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Get the model name/identifier
    fn model_name(&self) -> &str;
}

/// Factory trait for creating completion clients.
///
/// Handlers go through this trait so tests can substitute a mock client
/// without touching the network.
pub trait LlmClientFactoryTrait: Send + Sync {
    /// Create a client, or fail with [`AppError::MissingApiKey`] when no
    /// credential is configured. The credential check happens here, before
    /// any request is built.
    fn create(&self) -> Result<Arc<dyn LlmClient>>;
}

/// Configuration-based client factory.
///
/// Builds an [`OpenAiCompatClient`](super::openai::OpenAiCompatClient) per
/// request, mirroring how the endpoint credential can disappear or change
/// between requests via the environment.
pub struct LlmClientFactory {
    api_key: Option<String>,
    api_base: String,
    model: String,
}

impl LlmClientFactory {
    pub fn from_config(config: &LlmConfig) -> Self {
        Self {
            api_key: config.api_key.clone(),
            api_base: config.api_base.clone(),
            model: config.model.clone(),
        }
    }
}

impl LlmClientFactoryTrait for LlmClientFactory {
    fn create(&self) -> Result<Arc<dyn LlmClient>> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(AppError::MissingApiKey)?;

        Ok(Arc::new(super::openai::OpenAiCompatClient::new(
            api_key.to_string(),
            self.api_base.clone(),
            self.model.clone(),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::openai::{DEFAULT_MODEL, GROQ_API_BASE};

    fn config(api_key: Option<&str>) -> LlmConfig {
        LlmConfig {
            api_key: api_key.map(String::from),
            api_base: GROQ_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    #[test]
    fn test_factory_without_key_short_circuits() {
        let factory = LlmClientFactory::from_config(&config(None));
        assert!(matches!(factory.create(), Err(AppError::MissingApiKey)));
    }

    #[test]
    fn test_factory_treats_empty_key_as_missing() {
        let factory = LlmClientFactory::from_config(&config(Some("")));
        assert!(matches!(factory.create(), Err(AppError::MissingApiKey)));
    }

    #[test]
    fn test_factory_with_key_creates_client() {
        let factory = LlmClientFactory::from_config(&config(Some("gsk-test")));
        let client = factory.create().expect("client should be created");
        assert_eq!(client.model_name(), DEFAULT_MODEL);
    }
}
