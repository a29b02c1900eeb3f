//! LLM access for insight generation.
//!
//! DESIGN
//! ======
//! The only question ever put to a model is "answer this brief with a JSON
//! array", so the layer exposes exactly that through [`JsonModel`]. Each
//! provider holds the model to JSON its own way (see `anthropic` and
//! `openai`). `LLM_PROVIDER` picks which one [`LlmClient`] wraps.

pub mod anthropic;
pub mod config;
mod http;
pub mod openai;
pub mod types;

use config::{LlmConfig, LlmProviderKind};
pub use types::JsonModel;
use types::{JsonReply, ListPrompt, LlmError};

pub enum LlmClient {
    Anthropic(anthropic::AnthropicClient),
    OpenAi(openai::OpenAiClient),
}

impl LlmClient {
    /// # Errors
    ///
    /// Returns an error if the API key is missing, a setting does not parse
    /// or the HTTP client fails to build.
    pub fn from_env() -> Result<Self, LlmError> {
        Self::from_config(LlmConfig::from_env()?)
    }

    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn from_config(config: LlmConfig) -> Result<Self, LlmError> {
        Ok(match config.provider {
            LlmProviderKind::Anthropic => {
                Self::Anthropic(anthropic::AnthropicClient::new(config.api_key, config.model, config.timeouts)?)
            }
            LlmProviderKind::OpenAi => Self::OpenAi(openai::OpenAiClient::new(
                config.api_key,
                config.model,
                config.openai_mode,
                &config.openai_base_url,
                config.timeouts,
            )?),
        })
    }

    #[must_use]
    pub fn model(&self) -> &str {
        match self {
            Self::Anthropic(c) => c.model(),
            Self::OpenAi(c) => c.model(),
        }
    }
}

#[async_trait::async_trait]
impl JsonModel for LlmClient {
    async fn generate_list(&self, prompt: &ListPrompt<'_>) -> Result<JsonReply, LlmError> {
        match self {
            Self::Anthropic(c) => c.generate_list(prompt).await,
            Self::OpenAi(c) => c.generate_list(prompt).await,
        }
    }
}
