use crate::llm::client::LlmClient;
use crate::types::{AppError, Result};
use std::time::Duration;

/// Total attempts made against the completion endpoint per request.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Base unit of the linear backoff: attempt N waits N * 5 seconds.
const BACKOFF_STEP: Duration = Duration::from_secs(5);

/// Generate a completion, retrying rate-limited attempts.
///
/// Waits `5 * (attempt_index + 1)` seconds between rate-limited attempts
/// (5s then 10s for the default three attempts), so a fully rate-limited
/// request spends 15 accumulated seconds waiting. The wait is a tokio sleep:
/// the handling task yields instead of blocking a thread.
///
/// Any failure other than [`AppError::RateLimited`] propagates immediately.
/// `max_attempts == 0` fails with [`AppError::AttemptsExhausted`] rather
/// than pretending an empty completion succeeded.
///
/// No jitter, no exponential growth, no circuit breaker.
pub async fn generate_with_retry(
    client: &dyn LlmClient,
    prompt: &str,
    max_attempts: u32,
) -> Result<String> {
    for attempt in 0..max_attempts {
        match client.generate(prompt).await {
            Ok(text) => return Ok(text),
            Err(AppError::RateLimited) if attempt + 1 < max_attempts => {
                let wait = BACKOFF_STEP * (attempt + 1);
                tracing::warn!(
                    attempt = attempt + 1,
                    wait_secs = wait.as_secs(),
                    model = client.model_name(),
                    "completion endpoint rate limited, backing off"
                );
                tokio::time::sleep(wait).await;
            }
            Err(e) => return Err(e),
        }
    }

    Err(AppError::AttemptsExhausted)
}
