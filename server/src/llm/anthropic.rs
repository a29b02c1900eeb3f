//! Anthropic Messages API.
//!
//! The assistant turn is prefilled with `[`, so the model continues an array
//! that is already open and the reply never starts with prose. The prefill is
//! put back in front of the returned text.

use serde::{Deserialize, Serialize};

use super::config::LlmTimeouts;
use super::http::{build_client, post_for_body};
use super::types::{JsonReply, ListPrompt, LlmError};

const MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";
const LIST_PREFILL: &str = "[";

pub struct AnthropicClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl AnthropicClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(api_key: String, model: String, timeouts: LlmTimeouts) -> Result<Self, LlmError> {
        Ok(Self { http: build_client(timeouts)?, api_key, model })
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// # Errors
    ///
    /// Returns an error on transport failure, a non-2xx status or an
    /// undecodable envelope.
    pub async fn generate_list(&self, prompt: &ListPrompt<'_>) -> Result<JsonReply, LlmError> {
        let request = self
            .http
            .post(MESSAGES_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&request_body(&self.model, prompt));
        reply_from_body(&post_for_body(request).await?)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: [Turn<'a>; 2],
}

#[derive(Debug, Serialize)]
struct Turn<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<Block>,
    model: String,
    #[serde(default)]
    stop_reason: Option<String>,
    usage: Usage,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum Block {
    Text { text: String },
    #[serde(other)]
    Other,
}

#[derive(Deserialize)]
struct Usage {
    input_tokens: u64,
    output_tokens: u64,
}

fn request_body<'a>(model: &'a str, prompt: &ListPrompt<'a>) -> MessagesRequest<'a> {
    MessagesRequest {
        model,
        max_tokens: prompt.max_tokens,
        system: prompt.system,
        messages: [
            Turn { role: "user", content: prompt.user },
            Turn { role: "assistant", content: LIST_PREFILL },
        ],
    }
}

fn reply_from_body(body: &str) -> Result<JsonReply, LlmError> {
    let parsed: MessagesResponse = serde_json::from_str(body).map_err(|e| LlmError::Decode(e.to_string()))?;

    let mut json = String::from(LIST_PREFILL);
    for block in parsed.content {
        if let Block::Text { text } = block {
            json.push_str(&text);
        }
    }

    Ok(JsonReply {
        json,
        model: parsed.model,
        truncated: parsed.stop_reason.as_deref() == Some("max_tokens"),
        input_tokens: parsed.usage.input_tokens,
        output_tokens: parsed.usage.output_tokens,
    })
}

#[cfg(test)]
#[path = "anthropic_test.rs"]
mod tests;
