use crate::llm::{generate_with_retry, LlmClient, DEFAULT_MAX_ATTEMPTS};
use crate::types::Result;
use std::sync::Arc;

/// Explains code in simple terms with a line-by-line breakdown.
pub struct CodeExplainer {
    llm: Arc<dyn LlmClient>,
}

impl CodeExplainer {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    pub async fn run(&self, code: &str, language: &str) -> Result<String> {
        let prompt = build_prompt(code, language);
        generate_with_retry(self.llm.as_ref(), &prompt, DEFAULT_MAX_ATTEMPTS).await
    }
}

fn build_prompt(code: &str, language: &str) -> String {
    format!(
        r#"You are an expert programming tutor. Explain the following code in a clear, beginner-friendly way.

**Code ({language}):**
```
{code}
```

Provide:
1. **Overview**: What does this code do overall? (2-3 sentences)
2. **Step-by-Step Breakdown**: Explain each important section
3. **Key Concepts**: List any programming concepts used (with brief explanations)
4. **Potential Improvements**: Suggest any improvements or best practices
5. **Common Mistakes**: What mistakes might beginners make with similar code?

Use simple language and analogies where helpful. Format your response in Markdown."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_substitutes_code_and_language() {
        let prompt = build_prompt("fn main() {}", "rust");
        assert!(prompt.contains("**Code (rust):**"));
        assert!(prompt.contains("fn main() {}"));
        assert!(prompt.contains("Step-by-Step Breakdown"));
    }
}
