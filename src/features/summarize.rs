use crate::llm::{generate_with_retry, LlmClient, DEFAULT_MAX_ATTEMPTS};
use crate::types::Result;
use std::sync::Arc;

/// Summarizes documentation, articles, or any text.
pub struct ContentSummarizer {
    llm: Arc<dyn LlmClient>,
}

impl ContentSummarizer {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    pub async fn run(&self, content: &str, summary_type: &str) -> Result<String> {
        let prompt = build_prompt(content, summary_type);
        generate_with_retry(self.llm.as_ref(), &prompt, DEFAULT_MAX_ATTEMPTS).await
    }
}

/// Instruction snippet for a summary style; unrecognized styles fall back
/// to "concise".
fn summary_instruction(summary_type: &str) -> &'static str {
    match summary_type {
        "detailed" => "Create a comprehensive summary with all key points preserved.",
        "eli5" => "Explain it like I'm 5 years old - use simple words and fun analogies.",
        "actionable" => "Focus on action items, steps to follow, and practical takeaways.",
        "technical" => "Preserve technical accuracy while making it more digestible.",
        _ => "Create a brief 3-5 bullet point summary capturing the essence.",
    }
}

fn build_prompt(content: &str, summary_type: &str) -> String {
    let instruction = summary_instruction(summary_type);

    format!(
        r#"Summarize the following content:

**Content:**
{content}

**Summary Style:** {summary_type}
{instruction}

Provide:
1. **Summary** (in the requested style)
2. **Key Points** (bullet list of most important facts)
3. **Keywords** (important terms to remember)

Format in Markdown."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eli5_instruction_selected() {
        let prompt = build_prompt("Rust ownership rules", "eli5");
        assert!(prompt.contains("Rust ownership rules"));
        assert!(prompt.contains("like I'm 5 years old"));
    }

    #[test]
    fn test_unknown_style_falls_back_to_concise() {
        let prompt = build_prompt("some text", "haiku");
        assert!(prompt.contains("3-5 bullet point summary"));
    }
}
