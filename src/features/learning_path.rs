use crate::llm::{generate_with_retry, LlmClient, DEFAULT_MAX_ATTEMPTS};
use crate::types::Result;
use std::sync::Arc;

/// Generates a personalized, phased learning path toward a goal.
pub struct LearningPathPlanner {
    llm: Arc<dyn LlmClient>,
}

impl LearningPathPlanner {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    pub async fn run(&self, goal: &str, current_level: &str, time_available: &str) -> Result<String> {
        let prompt = build_prompt(goal, current_level, time_available);
        generate_with_retry(self.llm.as_ref(), &prompt, DEFAULT_MAX_ATTEMPTS).await
    }
}

fn build_prompt(goal: &str, current_level: &str, time_available: &str) -> String {
    format!(
        r#"Create a personalized learning path:

**Learning Goal:** {goal}
**Current Level:** {current_level}
**Time Available:** {time_available}

Create a structured learning path with:
1. **Prerequisites**: What should they know first?
2. **Learning Phases**: Break down into phases/weeks
3. **For Each Phase**:
   - Topics to cover
   - Recommended resources (be specific)
   - Practice projects
   - Milestones to achieve
4. **Assessment Checkpoints**: How to know they're progressing
5. **Tips for Success**: Study strategies and motivation tips
6. **Common Pitfalls**: What to avoid

Make it realistic and actionable. Format in Markdown with clear organization."#
    )
}
