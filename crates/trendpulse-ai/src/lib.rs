//! Completion-backed content suggestions and viral-potential analysis.
//!
//! A thin client abstraction over OpenAI-compatible chat completion APIs,
//! plus the prompt construction, response parsing and deterministic
//! fallbacks behind the two AI features. The fallbacks guarantee that a
//! valid request always resolves to a well-shaped result, whether or not
//! the completion backend is reachable.

mod analyze;
mod client;
mod openai;
mod suggest;
mod types;

pub use analyze::{AnalysisResult, analyze_content, fallback_analysis};
pub use client::{CompletionClient, CompletionError, CompletionOptions};
pub use openai::OpenAiClient;
pub use suggest::{SuggestionResult, fallback_suggestions, generate_suggestions};
pub use types::{Message, MessageRole};
