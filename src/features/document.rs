use crate::llm::{generate_with_retry, LlmClient, DEFAULT_MAX_ATTEMPTS};
use crate::types::Result;
use std::sync::Arc;

/// Generates professional documentation for code.
pub struct DocGenerator {
    llm: Arc<dyn LlmClient>,
}

impl DocGenerator {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    pub async fn run(&self, code: &str, doc_style: &str) -> Result<String> {
        let prompt = build_prompt(code, doc_style);
        generate_with_retry(self.llm.as_ref(), &prompt, DEFAULT_MAX_ATTEMPTS).await
    }
}

fn build_prompt(code: &str, doc_style: &str) -> String {
    format!(
        r#"Generate professional documentation for this code:

**Code:**
```
{code}
```

**Documentation Style:** {doc_style}

Create:
1. **Overview**: What does this code do?
2. **Function/Class Documentation**: Document each function/class with:
   - Purpose
   - Parameters (with types and descriptions)
   - Return values
   - Example usage
3. **Dependencies**: What does this code depend on?
4. **Usage Examples**: Show how to use this code
5. **Notes**: Any important considerations

Format as proper documentation (use docstring format where appropriate). Output in Markdown."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_code_and_style() {
        let prompt = build_prompt("def add(a, b): return a + b", "api-reference");
        assert!(prompt.contains("def add(a, b): return a + b"));
        assert!(prompt.contains("**Documentation Style:** api-reference"));
    }
}
