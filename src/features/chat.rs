use crate::llm::{generate_with_retry, LlmClient, DEFAULT_MAX_ATTEMPTS};
use crate::memory::{SessionStore, HISTORY_WINDOW};
use crate::types::{ChatTurn, Result, TurnRole};
use std::sync::Arc;

const SYSTEM_PROMPT: &str = r#"You are an AI learning assistant and developer productivity helper.
You help users:
- Learn programming concepts and technologies
- Understand and debug code
- Improve their productivity
- Explain complex topics simply

Be friendly, encouraging, and thorough. Use examples when helpful.
If the user asks something you're unsure about, be honest and suggest resources.
Keep responses focused and actionable."#;

/// Interactive chat for learning and productivity.
///
/// Reads the session's trailing [`HISTORY_WINDOW`] turns into the prompt and
/// appends the new user/assistant turns after a successful generation, so a
/// failed generation leaves the session history untouched.
pub struct ChatAssistant {
    llm: Arc<dyn LlmClient>,
    sessions: Arc<SessionStore>,
}

impl ChatAssistant {
    pub fn new(llm: Arc<dyn LlmClient>, sessions: Arc<SessionStore>) -> Self {
        Self { llm, sessions }
    }

    pub async fn run(&self, session_id: &str, message: &str, context: &str) -> Result<String> {
        let history = self.sessions.recent(session_id, HISTORY_WINDOW);
        let prompt = build_prompt(&history, message, context);

        let response = generate_with_retry(self.llm.as_ref(), &prompt, DEFAULT_MAX_ATTEMPTS).await?;

        self.sessions.append_turn(session_id, TurnRole::User, message);
        self.sessions
            .append_turn(session_id, TurnRole::Assistant, &response);

        Ok(response)
    }
}

fn build_prompt(history: &[ChatTurn], message: &str, context: &str) -> String {
    let history_text = history
        .iter()
        .map(|turn| format!("{}: {}", turn.role.as_str(), turn.content))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"{SYSTEM_PROMPT}

**Recent Conversation:**
{history_text}

**User's Message:**
{message}

**Context:** {context}

Respond helpfully in Markdown format."#
    )
}
