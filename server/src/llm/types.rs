//! Provider-neutral shapes for asking a model for a JSON list.
//!
//! Insight generation is a single user turn whose answer must be a JSON array
//! of records. Providers differ in how they can be held to that: some accept a
//! prefilled reply, others only promise a JSON object. [`ListPrompt`] carries
//! what both need and [`JsonReply`] hands back text that starts at the JSON.

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    #[error("missing API key: env var {var} not set")]
    MissingApiKey { var: String },

    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),

    /// Connection, timeout or body-read failure.
    #[error("provider unreachable: {0}")]
    Transport(String),

    #[error("provider returned status {status}")]
    Status { status: u16, body: String },

    /// The provider answered 200 but the envelope was not the expected shape.
    #[error("provider reply undecodable: {0}")]
    Decode(String),
}

impl LlmError {
    /// Whether the same prompt could succeed on a later attempt.
    #[must_use]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Status { status: 429 | 500..=599, .. })
    }
}

// =============================================================================
// PROMPT AND REPLY
// =============================================================================

/// One single-turn request whose answer is a JSON array.
#[derive(Debug, Clone, Copy)]
pub struct ListPrompt<'a> {
    pub system: &'a str,
    pub user: &'a str,
    pub max_tokens: u32,
    /// Field the array is nested under when a provider can only emit a JSON
    /// object, e.g. `{"insights": [...]}`.
    pub list_key: &'a str,
}

/// Model reply narrowed to its JSON text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonReply {
    /// Either the array itself or an object holding it under `list_key`.
    /// Anything after the JSON value is noise the model appended.
    pub json: String,
    pub model: String,
    /// The model stopped at the token limit, so the JSON is likely cut short.
    pub truncated: bool,
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl JsonReply {
    #[must_use]
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

// =============================================================================
// MODEL TRAIT
// =============================================================================

/// A model that can be asked for a JSON list. Mocked in tests.
#[async_trait::async_trait]
pub trait JsonModel: Send + Sync {
    /// # Errors
    ///
    /// Returns an [`LlmError`] when the provider cannot be reached, refuses
    /// the request or answers with an unexpected envelope.
    async fn generate_list(&self, prompt: &ListPrompt<'_>) -> Result<JsonReply, LlmError>;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
