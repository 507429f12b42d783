use crate::llm::openai::{DEFAULT_MODEL, GROQ_API_BASE};
use crate::types::{AppError, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub llm: LlmConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Completion-service credential; `None` degrades every generation
    /// route to an in-body error instead of crashing the process.
    pub api_key: Option<String>,
    pub api_base: String,
    pub model: String,
}

impl LlmConfig {
    pub fn api_key_configured(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.is_empty())
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Config {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "5000".to_string())
                    .parse()
                    .map_err(|e| AppError::Internal(format!("invalid PORT: {}", e)))?,
            },
            llm: LlmConfig {
                api_key: env::var("GROQ_API_KEY").ok().filter(|key| !key.is_empty()),
                api_base: env::var("GROQ_API_BASE").unwrap_or_else(|_| GROQ_API_BASE.to_string()),
                model: env::var("GROQ_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            },
        })
    }
}
