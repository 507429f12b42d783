//! Completion client and retry wrapper
//!
//! This module wraps the outbound call to an OpenAI-compatible chat-completion
//! endpoint (Groq by default) behind a small trait, and layers the crate's
//! single retry policy on top of it.
//!
//! # Architecture
//!
//! - [`LlmClient`] - the adapter trait; one prompt in, one completion out
//! - [`OpenAiCompatClient`] - the `async-openai` backed implementation
//! - [`LlmClientFactoryTrait`] / [`LlmClientFactory`] - client construction,
//!   which is where a missing credential is detected before any network call
//! - [`generate_with_retry`] - linear backoff on rate-limit failures
//!
//! Failures are classified into typed [`AppError`](crate::types::AppError)
//! variants at the adapter boundary; the retry loop never inspects error
//! message text.

/// Core client trait and the client factory.
pub mod client;
/// OpenAI-compatible endpoint client (Groq).
pub mod openai;
/// Rate-limit retry wrapper with linear backoff.
pub mod retry;

pub use client::{LlmClient, LlmClientFactory, LlmClientFactoryTrait};
pub use openai::{OpenAiCompatClient, DEFAULT_MODEL, GROQ_API_BASE};
pub use retry::{generate_with_retry, DEFAULT_MAX_ATTEMPTS};
