//! Mock implementations for testing.
//!
//! Provides mock completion clients and factories that can be shared across
//! test files without duplication or network access.

use async_trait::async_trait;
use mentor::llm::{LlmClient, LlmClientFactoryTrait};
use mentor::types::{AppError, Result};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock completion client with a fixed response or a fixed failure.
///
/// Every `generate` call is counted so tests can assert how many attempts
/// reached the adapter.
pub struct MockLlmClient {
    response: String,
    should_fail: bool,
    calls: AtomicUsize,
}

impl MockLlmClient {
    /// A client that always returns the given response.
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
            should_fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    /// A client that always returns an error.
    pub fn failing() -> Self {
        Self {
            response: String::new(),
            should_fail: true,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `generate` calls that reached this client.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn generate(&self, _prompt: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.should_fail {
            return Err(AppError::Llm("Mock LLM failure".to_string()));
        }
        Ok(self.response.clone())
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

/// Factory that always hands out the same mock client.
pub struct MockLlmFactory {
    client: Arc<MockLlmClient>,
}

impl MockLlmFactory {
    pub fn new(client: Arc<MockLlmClient>) -> Self {
        Self { client }
    }
}

impl LlmClientFactoryTrait for MockLlmFactory {
    fn create(&self) -> Result<Arc<dyn LlmClient>> {
        Ok(self.client.clone())
    }
}

/// Factory that reports a missing credential without ever creating a client.
pub struct UnconfiguredLlmFactory;

impl LlmClientFactoryTrait for UnconfiguredLlmFactory {
    fn create(&self) -> Result<Arc<dyn LlmClient>> {
        Err(AppError::MissingApiKey)
    }
}
