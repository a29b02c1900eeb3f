//! OpenAI-compatible APIs, either `/chat/completions` or `/responses`.
//!
//! Both are run in `json_object` mode. That mode cannot return a bare array,
//! so the system prompt gains one line asking for the array under the
//! prompt's `list_key`. Any compatible gateway can stand in via
//! `LLM_OPENAI_BASE_URL`.

use serde::{Deserialize, Serialize};

use super::config::{LlmTimeouts, OpenAiApiMode};
use super::http::{build_client, post_for_body};
use super::types::{JsonReply, ListPrompt, LlmError};

pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    mode: OpenAiApiMode,
}

impl OpenAiClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(
        api_key: String,
        model: String,
        mode: OpenAiApiMode,
        base_url: &str,
        timeouts: LlmTimeouts,
    ) -> Result<Self, LlmError> {
        Ok(Self {
            http: build_client(timeouts)?,
            api_key,
            base_url: base_url.trim_end_matches('/').to_owned(),
            model,
            mode,
        })
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
        let system = object_mode_system(prompt);
        match self.mode {
            OpenAiApiMode::ChatCompletions => {
                let body = chat_request(&self.model, &system, prompt);
                chat_reply(&self.post("/chat/completions", &body).await?)
            }
            OpenAiApiMode::Responses => {
                let body = responses_request(&self.model, &system, prompt);
                responses_reply(&self.post("/responses", &body).await?)
            }
        }
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> Result<String, LlmError> {
        let request = self
            .http
            .post(format!("{}{path}", self.base_url))
            .bearer_auth(&self.api_key)
            .json(body);
        post_for_body(request).await
    }
}

fn object_mode_system(prompt: &ListPrompt<'_>) -> String {
    format!(
        "{}\n\nReturn a JSON object whose \"{}\" field holds that array and nothing else.",
        prompt.system.trim_end(),
        prompt.list_key
    )
}

#[derive(Debug, Serialize)]
struct JsonObjectFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

const JSON_OBJECT: JsonObjectFormat = JsonObjectFormat { kind: "json_object" };

// =============================================================================
// CHAT COMPLETIONS
// =============================================================================

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: [ChatTurn<'a>; 2],
    response_format: JsonObjectFormat,
}

#[derive(Debug, Serialize)]
struct ChatTurn<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    model: String,
    choices: Vec<ChatChoice>,
    #[serde(default)]
    usage: ChatUsage,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Default, Deserialize)]
struct ChatUsage {
    #[serde(default)]
    prompt_tokens: u64,
    #[serde(default)]
    completion_tokens: u64,
}

fn chat_request<'a>(model: &'a str, system: &'a str, prompt: &ListPrompt<'a>) -> ChatRequest<'a> {
    ChatRequest {
        model,
        max_tokens: prompt.max_tokens,
        messages: [
            ChatTurn { role: "system", content: system },
            ChatTurn { role: "user", content: prompt.user },
        ],
        response_format: JSON_OBJECT,
    }
}

fn chat_reply(body: &str) -> Result<JsonReply, LlmError> {
    let parsed: ChatResponse = serde_json::from_str(body).map_err(|e| LlmError::Decode(e.to_string()))?;
    let Some(choice) = parsed.choices.into_iter().next() else {
        return Err(LlmError::Decode("chat completion without choices".into()));
    };
    Ok(JsonReply {
        json: choice.message.content.unwrap_or_default(),
        model: parsed.model,
        truncated: choice.finish_reason.as_deref() == Some("length"),
        input_tokens: parsed.usage.prompt_tokens,
        output_tokens: parsed.usage.completion_tokens,
    })
}

// =============================================================================
// RESPONSES
// =============================================================================

#[derive(Debug, Serialize)]
struct ResponsesRequest<'a> {
    model: &'a str,
    max_output_tokens: u32,
    instructions: &'a str,
    input: &'a str,
    text: TextConfig,
}

#[derive(Debug, Serialize)]
struct TextConfig {
    format: JsonObjectFormat,
}

#[derive(Deserialize)]
struct ResponsesResponse {
    #[serde(default)]
    model: String,
    #[serde(default)]
    output: Vec<OutputItem>,
    #[serde(default)]
    incomplete_details: Option<IncompleteDetails>,
    #[serde(default)]
    usage: ResponsesUsage,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum OutputItem {
    Message {
        #[serde(default)]
        content: Vec<OutputPart>,
    },
    #[serde(other)]
    Other,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum OutputPart {
    OutputText { text: String },
    #[serde(other)]
    Other,
}

#[derive(Deserialize)]
struct IncompleteDetails {
    #[serde(default)]
    reason: Option<String>,
}

#[derive(Default, Deserialize)]
struct ResponsesUsage {
    #[serde(default)]
    input_tokens: u64,
    #[serde(default)]
    output_tokens: u64,
}

fn responses_request<'a>(model: &'a str, system: &'a str, prompt: &ListPrompt<'a>) -> ResponsesRequest<'a> {
    ResponsesRequest {
        model,
        max_output_tokens: prompt.max_tokens,
        instructions: system,
        input: prompt.user,
        text: TextConfig { format: JSON_OBJECT },
    }
}

fn responses_reply(body: &str) -> Result<JsonReply, LlmError> {
    let parsed: ResponsesResponse = serde_json::from_str(body).map_err(|e| LlmError::Decode(e.to_string()))?;

    let mut json = String::new();
    for item in parsed.output {
        let OutputItem::Message { content } = item else { continue };
        for part in content {
            if let OutputPart::OutputText { text } = part {
                json.push_str(&text);
            }
        }
    }

    let truncated = parsed
        .incomplete_details
        .and_then(|d| d.reason)
        .is_some_and(|reason| reason == "max_output_tokens");

    Ok(JsonReply {
        json,
        model: parsed.model,
        truncated,
        input_tokens: parsed.usage.input_tokens,
        output_tokens: parsed.usage.output_tokens,
    })
}

#[cfg(test)]
#[path = "openai_test.rs"]
mod tests;
