//! # Mentor - AI Learning & Developer Productivity Backend
//!
//! A web backend that turns user-supplied text (code, topics, errors,
//! documents) into prompt-templated requests against an OpenAI-compatible
//! chat-completion endpoint (Groq by default) and returns the formatted
//! response as JSON.
//!
//! ## Overview
//!
//! Mentor can be used in two ways:
//!
//! 1. **As a standalone server** - Run the `mentor-server` binary
//! 2. **As a library** - Import components into your own Rust project
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust,ignore
//! use mentor::llm::{generate_with_retry, LlmClientFactory, LlmClientFactoryTrait};
//! use mentor::utils::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let factory = LlmClientFactory::from_config(&config.llm);
//!
//!     let client = factory.create()?;
//!     let text = generate_with_retry(client.as_ref(), "Explain borrowing", 3).await?;
//!     println!("{}", text);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! | Route | Feature |
//! |-------|---------|
//! | `POST /api/explain-code` | Code explanation with step-by-step breakdown |
//! | `POST /api/tutor` | Personalized lessons by level and learning style |
//! | `POST /api/summarize` | Summaries in concise/detailed/eli5/actionable/technical styles |
//! | `POST /api/debug` | Root-cause analysis for code plus an error message |
//! | `POST /api/document` | Documentation generation |
//! | `POST /api/chat` | Session-scoped chat with short-term memory |
//! | `POST /api/learning-path` | Structured learning roadmaps |
//!
//! ## Modules
//!
//! - [`api`] - REST API handlers and routes
//! - [`features`] - Prompt builders for each generation feature
//! - [`llm`] - Completion client, factory, and retry wrapper
//! - [`memory`] - Per-session conversation buffers
//! - [`types`] - Request/response types and error handling
//! - [`utils`] - Environment configuration

/// HTTP API handlers and routes.
pub mod api;
/// Generation features (prompt builders).
pub mod features;
/// Completion client and retry wrapper.
pub mod llm;
/// Per-session conversation memory.
pub mod memory;
/// Core types (requests, responses, errors).
pub mod types;
/// Configuration utilities.
pub mod utils;

// Re-export commonly used types
pub use llm::{LlmClient, LlmClientFactory, LlmClientFactoryTrait};
pub use memory::SessionStore;
pub use types::{AppError, Result};
pub use utils::config::Config;

use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Environment-sourced configuration
    pub config: Arc<Config>,
    /// Completion client factory; fails fast when no credential is set
    pub llm_factory: Arc<dyn LlmClientFactoryTrait>,
    /// Per-session conversation buffers for the chat feature
    pub sessions: Arc<SessionStore>,
}

impl AppState {
    /// Build the production state from configuration.
    pub fn new(config: Config) -> Self {
        let llm_factory = Arc::new(LlmClientFactory::from_config(&config.llm));
        Self {
            config: Arc::new(config),
            llm_factory,
            sessions: Arc::new(SessionStore::with_defaults()),
        }
    }
}
