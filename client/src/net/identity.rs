//! Identity-provider client (GoTrue-compatible REST).
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`; sessions persist in
//! `localStorage` through `util::session_store`.
//! Server-side (SSR): every call resolves to `AuthError::Unavailable`.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `IdentityClient` is provided through context. Each successful call that
//! changes the session also emits a `SessionChange` on the client's
//! `SessionEvents` hub, which the app root forwards into `AppState`.
//!
//! ERROR HANDLING
//! ==============
//! Provider failures are classified into `AuthError` by the provider's error
//! code first and only then by message text, so the friendly messages survive
//! wording changes upstream.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use std::sync::{Arc, Mutex};

use serde::Deserialize;

use super::types::IdentityConfig;
use crate::state::session::{Session, SessionChange, SessionEvent, SessionEvents, Subscription};

/// Classified identity-provider failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("invalid login credentials")]
    InvalidCredentials,
    #[error("user already registered")]
    AlreadyRegistered,
    #[error("email not confirmed")]
    EmailNotConfirmed,
    #[error("identity service is not configured")]
    NotConfigured,
    #[error("not available on server")]
    Unavailable,
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    Malformed(String),
    #[error("provider error {status}: {message}")]
    Provider { status: u16, message: String },
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error_code: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
}

impl AuthError {
    /// Classify a non-2xx response body.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
        match parsed.error_code.as_deref() {
            Some("invalid_credentials") => return Self::InvalidCredentials,
            Some("user_already_exists" | "email_exists") => return Self::AlreadyRegistered,
            Some("email_not_confirmed") => return Self::EmailNotConfirmed,
            _ => {}
        }
        let message = parsed
            .msg
            .or(parsed.error_description)
            .or(parsed.message)
            .or(parsed.error)
            .unwrap_or_default();
        if message.contains("Invalid login credentials") {
            Self::InvalidCredentials
        } else if message.contains("User already registered") {
            Self::AlreadyRegistered
        } else if message.contains("Email not confirmed") {
            Self::EmailNotConfirmed
        } else {
            Self::Provider { status, message }
        }
    }

    /// Text shown inline on the login form.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidCredentials => "Invalid email or password. Please try again.".to_owned(),
            Self::AlreadyRegistered => "An account with this email already exists. Try signing in.".to_owned(),
            Self::EmailNotConfirmed => "Please confirm your email before signing in.".to_owned(),
            Self::NotConfigured | Self::Unavailable => "Sign-in is not available right now.".to_owned(),
            Self::Provider { message, .. } if !message.trim().is_empty() => message.clone(),
            Self::Provider { .. } | Self::Network(_) | Self::Malformed(_) => "Authentication failed".to_owned(),
        }
    }

    /// The provider no longer recognises the token, so the session is over
    /// whatever the request itself returned.
    #[must_use]
    pub fn session_already_gone(&self) -> bool {
        matches!(self, Self::Provider { status: 401 | 403 | 404, .. })
    }
}

#[derive(Debug, Default, Deserialize)]
struct UserMetadata {
    #[serde(default)]
    full_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UserBody {
    id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    user_metadata: UserMetadata,
}

#[derive(Debug, Deserialize)]
struct TokenBody {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    expires_at: Option<i64>,
    #[serde(default)]
    user: Option<UserBody>,
}

fn build_session(user: UserBody, tokens: RedirectTokens) -> Session {
    Session {
        user_id: user.id,
        email: user.email,
        display_name: user.user_metadata.full_name,
        access_token: tokens.access_token,
        refresh_token: tokens.refresh_token,
        expires_at: tokens.expires_at,
    }
}

/// Parse a token or sign-up response.
///
/// Returns `Ok(None)` when the body carries no access token, which is what
/// sign-up returns while the address still needs confirming.
///
/// # Errors
///
/// Returns `AuthError::Malformed` for non-JSON bodies or a token without a user.
pub fn parse_session_body(body: &str, now_secs: i64) -> Result<Option<Session>, AuthError> {
    let parsed: TokenBody = serde_json::from_str(body).map_err(|e| AuthError::Malformed(e.to_string()))?;
    let Some(access_token) = parsed.access_token.filter(|t| !t.is_empty()) else {
        return Ok(None);
    };
    let user = parsed.user.ok_or_else(|| AuthError::Malformed("token without user".to_owned()))?;
    let expires_at = parsed.expires_at.or(parsed.expires_in.map(|secs| now_secs + secs));
    let tokens = RedirectTokens {
        access_token,
        refresh_token: parsed.refresh_token,
        expires_at,
        event: SessionEvent::SignedIn,
    };
    Ok(Some(build_session(user, tokens)))
}

/// Tokens handed back in the URL fragment after an email link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RedirectTokens {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_at: Option<i64>,
    /// `PasswordRecovery` for reset links, `SignedIn` for everything else.
    pub event: SessionEvent,
}

/// Read tokens out of a redirect fragment such as
/// `#access_token=..&expires_in=3600&refresh_token=..&type=recovery`.
#[must_use]
pub fn parse_redirect_fragment(fragment: &str, now_secs: i64) -> Option<RedirectTokens> {
    let mut access_token = None;
    let mut refresh_token = None;
    let mut expires_at = None;
    let mut expires_in = None;
    let mut event = SessionEvent::SignedIn;
    for pair in fragment.trim_start_matches('#').split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        match key {
            "access_token" if !value.is_empty() => access_token = Some(value.to_owned()),
            "refresh_token" if !value.is_empty() => refresh_token = Some(value.to_owned()),
            "expires_at" => expires_at = value.parse::<i64>().ok(),
            "expires_in" => expires_in = value.parse::<i64>().ok(),
            "type" if value == "recovery" => event = SessionEvent::PasswordRecovery,
            _ => {}
        }
    }
    Some(RedirectTokens {
        access_token: access_token?,
        refresh_token,
        expires_at: expires_at.or(expires_in.map(|secs| now_secs + secs)),
        event,
    })
}

/// Result of a sign-up call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignUpOutcome {
    /// The provider auto-confirmed the account and issued a session.
    SignedIn(Session),
    /// The account exists but the address must be confirmed first.
    ConfirmationRequired,
}

/// Handle to the identity provider. Clones share config and listeners.
#[derive(Clone, Debug, Default)]
pub struct IdentityClient {
    config: Arc<Mutex<IdentityConfig>>,
    events: SessionEvents,
}

impl IdentityClient {
    #[must_use]
    pub fn new(config: IdentityConfig) -> Self {
        Self { config: Arc::new(Mutex::new(config)), events: SessionEvents::new() }
    }

    /// Replace the provider settings (fetched after mount).
    pub fn configure(&self, config: IdentityConfig) {
        if let Ok(mut slot) = self.config.lock() {
            *slot = config;
        }
    }

    #[must_use]
    pub fn config(&self) -> IdentityConfig {
        self.config.lock().map(|c| c.clone()).unwrap_or_default()
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.config().is_configured()
    }

    /// Listen for session changes until the `Subscription` is dropped.
    pub fn on_session_change<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&SessionChange) + Send + Sync + 'static,
    {
        self.events.subscribe(callback)
    }

    fn publish(&self, event: SessionEvent, session: Option<Session>) {
        self.events.emit(&SessionChange::new(event, session));
    }

    /// Persist and announce a new or refreshed session.
    fn adopt(&self, event: SessionEvent, session: &Session) {
        crate::util::session_store::save_session(session);
        self.publish(event, Some(session.clone()));
    }

    fn configured(&self) -> Result<IdentityConfig, AuthError> {
        let config = self.config();
        if config.is_configured() { Ok(config) } else { Err(AuthError::NotConfigured) }
    }

    /// Stored session, refreshed first if its access token has expired.
    pub async fn current_session(&self) -> Option<Session> {
        let stored = crate::util::session_store::load_session()?;
        let now = crate::util::clock::Timestamp::now().seconds();
        if !stored.is_expired(now) {
            return Some(stored);
        }
        let refreshed = match stored.refresh_token.as_deref() {
            Some(token) => self.refresh_session(token).await.ok(),
            None => None,
        };
        if refreshed.is_none() {
            crate::util::session_store::clear_session();
        }
        refreshed
    }

    /// Exchange a refresh token for a new session and emit `TokenRefreshed`.
    ///
    /// # Errors
    ///
    /// Returns the classified provider error or a transport failure.
    pub async fn refresh_session(&self, refresh_token: &str) -> Result<Session, AuthError> {
        let body = serde_json::json!({ "refresh_token": refresh_token });
        let raw = self.post("/auth/v1/token", &[("grant_type", "refresh_token")], &body, None).await?;
        let session = issued_session(&raw)?;
        self.adopt(SessionEvent::TokenRefreshed, &session);
        Ok(session)
    }

    /// Password sign-in. Emits `SignedIn` on success.
    ///
    /// # Errors
    ///
    /// Returns the classified provider error or a transport failure.
    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let body = serde_json::json!({ "email": email, "password": password });
        let raw = self.post("/auth/v1/token", &[("grant_type", "password")], &body, None).await?;
        let session = issued_session(&raw)?;
        self.adopt(SessionEvent::SignedIn, &session);
        Ok(session)
    }

    /// Create an account. Emits `SignedIn` only when a session is issued.
    ///
    /// # Errors
    ///
    /// Returns the classified provider error or a transport failure.
    pub async fn sign_up(&self, email: &str, password: &str, display_name: &str) -> Result<SignUpOutcome, AuthError> {
        let body = serde_json::json!({
            "email": email,
            "password": password,
            "data": { "full_name": display_name },
        });
        let raw = self.post("/auth/v1/signup", &[], &body, None).await?;
        let now = crate::util::clock::Timestamp::now().seconds();
        match parse_session_body(&raw, now)? {
            Some(session) => {
                self.adopt(SessionEvent::SignedIn, &session);
                Ok(SignUpOutcome::SignedIn(session))
            }
            None => Ok(SignUpOutcome::ConfirmationRequired),
        }
    }

    /// Revoke the current session.
    ///
    /// A rejected or expired token counts as signed out: the local session is
    /// cleared and `SignedOut` is published. Any other failure leaves local
    /// state alone.
    ///
    /// # Errors
    ///
    /// Returns the classified provider error or a transport failure.
    pub async fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        match self.post("/auth/v1/logout", &[], &serde_json::json!({}), Some(access_token)).await {
            Ok(_) => {}
            Err(e) if e.session_already_gone() => {
                leptos::logging::warn!("sign-out: provider dropped the session already ({e})");
            }
            Err(e) => return Err(e),
        }
        crate::util::session_store::clear_session();
        self.publish(SessionEvent::SignedOut, None);
        Ok(())
    }

    /// Send a password-reset email whose link returns to `redirect_to`.
    ///
    /// # Errors
    ///
    /// Returns the classified provider error or a transport failure.
    pub async fn request_password_reset(&self, email: &str, redirect_to: &str) -> Result<(), AuthError> {
        self.post("/auth/v1/recover", &recover_query(redirect_to), &serde_json::json!({ "email": email }), None)
            .await?;
        Ok(())
    }

    /// Adopt tokens from an email-link redirect, if the page was opened by one.
    ///
    /// Clears the fragment from the address bar and emits `PasswordRecovery`
    /// for reset links or `SignedIn` otherwise.
    pub async fn consume_redirect(&self) -> Option<Session> {
        #[cfg(feature = "hydrate")]
        {
            let window = web_sys::window()?;
            let hash = window.location().hash().ok()?;
            let now = crate::util::clock::Timestamp::now().seconds();
            let tokens = parse_redirect_fragment(&hash, now)?;
            if let Ok(history) = window.history() {
                let path = window.location().pathname().unwrap_or_default();
                let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&path));
            }
            let user = match self.fetch_user(&tokens.access_token).await {
                Ok(user) => user,
                Err(e) => {
                    leptos::logging::warn!("redirect session rejected: {e}");
                    return None;
                }
            };
            let event = tokens.event;
            let session = build_session(user, tokens);
            self.adopt(event, &session);
            Some(session)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    #[cfg(feature = "hydrate")]
    async fn fetch_user(&self, access_token: &str) -> Result<UserBody, AuthError> {
        let config = self.configured()?;
        let resp = gloo_net::http::Request::get(&config.endpoint("/auth/v1/user"))
            .header("apikey", &config.identity_anon_key)
            .header("Authorization", &format!("Bearer {access_token}"))
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        let status = resp.status();
        let text = resp.text().await.map_err(|e| AuthError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(AuthError::from_response(status, &text));
        }
        serde_json::from_str(&text).map_err(|e| AuthError::Malformed(e.to_string()))
    }

    /// POST `body` to `path` and return the response text of a 2xx reply.
    async fn post(
        &self,
        path: &str,
        query: &[(&str, &str)],
        body: &serde_json::Value,
        bearer: Option<&str>,
    ) -> Result<String, AuthError> {
        let config = self.configured()?;
        #[cfg(feature = "hydrate")]
        {
            let mut request = gloo_net::http::Request::post(&config.endpoint(path))
                .header("apikey", &config.identity_anon_key)
                .header("Content-Type", "application/json")
                .query(query.iter().copied());
            if let Some(token) = bearer {
                request = request.header("Authorization", &format!("Bearer {token}"));
            }
            let resp = request
                .json(body)
                .map_err(|e| AuthError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| AuthError::Network(e.to_string()))?;
            let status = resp.status();
            let text = resp.text().await.map_err(|e| AuthError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(AuthError::from_response(status, &text));
            }
            Ok(text)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (config, path, query, body, bearer);
            Err(AuthError::Unavailable)
        }
    }
}

fn issued_session(raw: &str) -> Result<Session, AuthError> {
    let now = crate::util::clock::Timestamp::now().seconds();
    parse_session_body(raw, now)?.ok_or_else(|| AuthError::Malformed("response without session".to_owned()))
}

/// Query for the password-reset call; the request builder does the encoding.
fn recover_query(redirect_to: &str) -> [(&'static str, &str); 1] {
    [("redirect_to", redirect_to)]
}
