use crate::llm::{generate_with_retry, LlmClient, DEFAULT_MAX_ATTEMPTS};
use crate::types::Result;
use std::sync::Arc;

/// Personalized tutoring on any topic, adapted to level and learning style.
pub struct TopicTutor {
    llm: Arc<dyn LlmClient>,
}

impl TopicTutor {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    pub async fn run(&self, topic: &str, level: &str, learning_style: &str) -> Result<String> {
        let prompt = build_prompt(topic, level, learning_style);
        generate_with_retry(self.llm.as_ref(), &prompt, DEFAULT_MAX_ATTEMPTS).await
    }
}

/// Instruction snippet for a learning style; unrecognized styles fall back
/// to "visual".
fn style_instruction(learning_style: &str) -> &'static str {
    match learning_style {
        "practical" => {
            "Focus on hands-on examples, real-world applications, and coding exercises."
        }
        "theoretical" => {
            "Emphasize underlying principles, mathematical foundations, and academic concepts."
        }
        "storytelling" => {
            "Teach through stories, real-world scenarios, and relatable examples."
        }
        _ => {
            "Use diagrams descriptions, flowcharts, and visual analogies. Include ASCII art where helpful."
        }
    }
}

/// Instruction snippet for a student level; unrecognized levels fall back
/// to "beginner".
fn level_instruction(level: &str) -> &'static str {
    match level {
        "intermediate" => "Assume basic understanding. Build on fundamentals with more depth.",
        "advanced" => {
            "Assume strong foundation. Focus on nuances, edge cases, and expert techniques."
        }
        _ => "Assume no prior knowledge. Use simple words and lots of examples.",
    }
}

fn build_prompt(topic: &str, level: &str, learning_style: &str) -> String {
    let level_snippet = level_instruction(level);
    let style_snippet = style_instruction(learning_style);

    format!(
        r#"You are a world-class tutor specialized in adaptive learning. Teach the following topic:

**Topic**: {topic}
**Student Level**: {level}
**Learning Style**: {learning_style}

{level_snippet}
{style_snippet}

Structure your lesson as:
1. **Introduction** (Hook the learner with why this matters)
2. **Core Concepts** (Main ideas explained clearly)
3. **Examples** (At least 2-3 practical examples)
4. **Practice Questions** (3 questions to test understanding, with answers hidden in spoiler format)
5. **Summary** (Key takeaways in bullet points)
6. **Next Steps** (What to learn next)

Make it engaging and memorable! Use emojis sparingly to add personality. Format in Markdown."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_style_and_level_selected() {
        let prompt = build_prompt("recursion", "advanced", "practical");
        assert!(prompt.contains("**Topic**: recursion"));
        assert!(prompt.contains("Assume strong foundation."));
        assert!(prompt.contains("Focus on hands-on examples"));
    }

    #[test]
    fn test_unrecognized_options_fall_back_to_defaults() {
        let prompt = build_prompt("recursion", "wizard", "osmosis");
        assert!(prompt.contains("Assume no prior knowledge."));
        assert!(prompt.contains("visual analogies"));
    }
}
