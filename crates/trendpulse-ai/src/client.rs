//! Completion client trait definition.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::types::Message;

/// Options for a completion request.
#[derive(Debug, Clone)]
pub struct CompletionOptions {
    /// Temperature for sampling (0.0 = deterministic, 1.0 = creative).
    pub temperature: f32,
    /// Maximum tokens to generate.
    pub max_tokens: Option<u32>,
    /// Request timeout; a timed-out call resolves to the failure branch.
    pub timeout: Duration,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: None,
            timeout: Duration::from_secs(30),
        }
    }
}

/// Errors that can occur when talking to a completion backend.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("rate limited")]
    RateLimited,

    #[error("request timeout")]
    Timeout,

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// A chat-completion backend.
///
/// The route layer only sees this trait; tests substitute a scripted
/// implementation so no request ever leaves the process.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Backend name for logs (e.g. "openai").
    fn name(&self) -> &str;

    /// Run a single completion over `messages`, returning the raw text of
    /// the model's reply.
    async fn complete(
        &self,
        messages: &[Message],
        options: &CompletionOptions,
    ) -> Result<String, CompletionError>;
}

/// Models occasionally wrap the requested JSON object in Markdown code
/// fences even when asked for a bare object; strip them before parsing.
pub(crate) fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_code_fences() {
        assert_eq!(strip_code_fences("{\"a\": 1}"), "{\"a\": 1}");
        assert_eq!(strip_code_fences("```json\n{\"a\": 1}\n```"), "{\"a\": 1}");
        assert_eq!(strip_code_fences("```\n{\"a\": 1}\n```"), "{\"a\": 1}");
        assert_eq!(strip_code_fences("  {\"a\": 1}  "), "{\"a\": 1}");
    }

    #[test]
    fn test_default_options() {
        let options = CompletionOptions::default();
        assert_eq!(options.timeout, Duration::from_secs(30));
        assert!(options.max_tokens.is_none());
    }
}
