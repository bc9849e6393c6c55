//! OpenAI-compatible completion client.
//!
//! Works with OpenAI and any other service implementing the chat
//! completions API. Completions are requested in JSON mode, since every
//! caller in this crate expects a JSON object back.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::client::{CompletionClient, CompletionError, CompletionOptions};
use crate::types::{Message, MessageRole};

/// OpenAI-compatible completion client.
pub struct OpenAiClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl OpenAiClient {
    /// Create a new client.
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the API (e.g., "https://api.openai.com/v1").
    /// * `model` - Model to use (e.g., "gpt-4o-mini").
    /// * `api_key` - Optional API key; without one, authenticated services
    ///   will reject the call and the caller's fallback path takes over.
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            model: model.into(),
            api_key,
        }
    }

    fn to_wire_messages(messages: &[Message]) -> Vec<WireMessage> {
        messages.iter().map(|m| m.into()).collect()
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    fn name(&self) -> &str {
        "openai"
    }

    async fn complete(
        &self,
        messages: &[Message],
        options: &CompletionOptions,
    ) -> Result<String, CompletionError> {
        let url = format!("{}/chat/completions", self.base_url);

        let request = ChatRequest {
            model: self.model.clone(),
            messages: Self::to_wire_messages(messages),
            temperature: Some(options.temperature),
            max_tokens: options.max_tokens,
            response_format: ResponseFormat {
                format_type: "json_object",
            },
        };

        debug!(
            model = %self.model,
            message_count = messages.len(),
            "Sending completion request"
        );

        let mut req_builder = self.client.post(&url).json(&request);

        if let Some(api_key) = &self.api_key {
            req_builder = req_builder.header("Authorization", format!("Bearer {}", api_key));
        }

        let response = req_builder
            .timeout(options.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CompletionError::Timeout
                } else {
                    CompletionError::Connection(e.to_string())
                }
            })?;

        let status = response.status();
        if status.as_u16() == 429 {
            return Err(CompletionError::RateLimited);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let chat: ChatResponse = response.json().await.map_err(|e| {
            CompletionError::InvalidResponse(format!("failed to parse completion response: {}", e))
        })?;

        let choice = chat.choices.into_iter().next().ok_or_else(|| {
            CompletionError::InvalidResponse("no choices in completion response".to_string())
        })?;

        choice
            .message
            .content
            .filter(|content| !content.is_empty())
            .ok_or_else(|| {
                CompletionError::InvalidResponse("empty completion content".to_string())
            })
    }
}

// Wire types

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<WireMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(Debug, Serialize)]
struct WireMessage {
    role: String,
    content: String,
}

impl From<&Message> for WireMessage {
    fn from(msg: &Message) -> Self {
        let role = match msg.role {
            MessageRole::System => "system",
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        };
        WireMessage {
            role: role.to_string(),
            content: msg.content.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}
