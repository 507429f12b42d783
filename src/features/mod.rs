//! Generation features.
//!
//! Each feature renders user input into a fixed prompt template and delegates
//! to the retry wrapper in [`crate::llm::retry`]. Prompt construction is pure;
//! the only feature touching shared state is [`chat::ChatAssistant`], which
//! reads and extends its session's conversation buffer.
//!
//! Option vocabularies (tutor level, learning style, summary style) are fixed
//! mappings over the raw request string and fall back to a named default on
//! unrecognized values instead of rejecting the request.

/// Interactive chat assistant with per-session short-term memory.
pub mod chat;
/// Debugging help for code plus an error message.
pub mod debug;
/// Documentation generation for code.
pub mod document;
/// Beginner-friendly code explanation.
pub mod explain;
/// Structured learning-path planning.
pub mod learning_path;
/// Content summarization in several styles.
pub mod summarize;
/// Personalized topic tutoring.
pub mod tutor;

pub use chat::ChatAssistant;
pub use debug::DebugHelper;
pub use document::DocGenerator;
pub use explain::CodeExplainer;
pub use learning_path::LearningPathPlanner;
pub use summarize::ContentSummarizer;
pub use tutor::TopicTutor;
