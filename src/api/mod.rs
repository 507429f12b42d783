//! HTTP API Handlers and Routes
//!
//! The REST layer of the server, built on the Axum web framework.
//!
//! # Module Structure
//!
//! - [`api::handlers`](crate::api::handlers) - Request handlers for each endpoint
//! - [`api::routes`](crate::api::routes) - Route definitions and router configuration
//!
//! # API Endpoints
//!
//! ## Generation (`/api/...`)
//! - `POST /api/explain-code` - Explain code in beginner-friendly terms
//! - `POST /api/tutor` - Personalized lesson on a topic
//! - `POST /api/summarize` - Summarize content in a chosen style
//! - `POST /api/debug` - Diagnose code plus an error message
//! - `POST /api/document` - Generate documentation for code
//! - `POST /api/learning-path` - Structured learning roadmap toward a goal
//!
//! ## Chat (`/api/chat`)
//! - `POST /api/chat` - Session-scoped chat with short-term memory
//! - `POST /api/clear-chat` - Clear one session's history, or all of them
//!
//! ## Health (`/api/health`)
//! - `GET /api/health` - Reports credential configuration and server time
//!
//! # Error Shape
//!
//! Missing required input fails fast with HTTP 400 and `{"error": "..."}`.
//! Generation failures (missing credential, upstream errors) return HTTP 200
//! with `{"error": "...", "success": false}` in the body, matching what the
//! browser client expects.

/// Request and response handlers for all API endpoints.
pub mod handlers;
/// Router configuration and route definitions.
pub mod routes;
