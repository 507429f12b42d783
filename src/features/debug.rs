use crate::llm::{generate_with_retry, LlmClient, DEFAULT_MAX_ATTEMPTS};
use crate::types::Result;
use std::sync::Arc;

/// Helps debug code and explains errors.
pub struct DebugHelper {
    llm: Arc<dyn LlmClient>,
}

impl DebugHelper {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    pub async fn run(&self, code: &str, error_message: &str, language: &str) -> Result<String> {
        let prompt = build_prompt(code, error_message, language);
        generate_with_retry(self.llm.as_ref(), &prompt, DEFAULT_MAX_ATTEMPTS).await
    }
}

fn build_prompt(code: &str, error_message: &str, language: &str) -> String {
    format!(
        r#"You are an expert debugging assistant. Help fix this code issue.

**Code ({language}):**
```
{code}
```

**Error/Problem:**
{error_message}

Provide:
1. **Problem Identification**: What exactly is wrong?
2. **Root Cause**: Why is this happening? Explain the underlying issue.
3. **Solution**: Show the corrected code with explanations
4. **Prevention Tips**: How to avoid similar issues in the future
5. **Related Concepts**: What should the developer learn to understand this better?

Be encouraging and educational. Format in Markdown."#
    )
}
