//! Server process configuration.
//!
//! Values come from the environment (after `.env` is loaded by `main`).
//! LLM settings live in [`crate::llm::config`] because a missing LLM key only
//! disables insight generation, while a bad value here stops startup.

use client::net::types::IdentityConfig;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_INSIGHTS_MAX_TOKENS: u32 = 2048;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Public identity settings handed to the browser by `GET /api/config`.
    pub identity: IdentityConfig,
    pub insights_max_tokens: u32,
    /// Key rate limits by the first `X-Forwarded-For` hop. Only safe behind a
    /// proxy that overwrites the header.
    pub trust_forwarded_for: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            identity: IdentityConfig::default(),
            insights_max_tokens: DEFAULT_INSIGHTS_MAX_TOKENS,
            trust_forwarded_for: false,
        }
    }
}

impl ServerConfig {
    /// Read `PORT`, `IDENTITY_URL`, `IDENTITY_ANON_KEY`,
    /// `INSIGHTS_MAX_TOKENS` and `TRUST_FORWARDED_FOR` from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error when a numeric or boolean value is present but does
    /// not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`], reading values through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns an error when a numeric or boolean value is present but does
    /// not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let insights_max_tokens = parse_or("INSIGHTS_MAX_TOKENS", lookup("INSIGHTS_MAX_TOKENS"), DEFAULT_INSIGHTS_MAX_TOKENS)?;
        let trust_forwarded_for = parse_or("TRUST_FORWARDED_FOR", lookup("TRUST_FORWARDED_FOR"), false)?;
        let identity = IdentityConfig {
            identity_url: lookup("IDENTITY_URL")
                .unwrap_or_default()
                .trim()
                .trim_end_matches('/')
                .to_owned(),
            identity_anon_key: lookup("IDENTITY_ANON_KEY").unwrap_or_default().trim().to_owned(),
        };
        Ok(Self { port, identity, insights_max_tokens, trust_forwarded_for })
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid { var, value: value.to_owned() }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
