//! HTTP plumbing shared by the provider clients.

use std::time::Duration;

use super::config::LlmTimeouts;
use super::types::LlmError;

pub(crate) fn build_client(timeouts: LlmTimeouts) -> Result<reqwest::Client, LlmError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeouts.request_secs))
        .connect_timeout(Duration::from_secs(timeouts.connect_secs))
        .build()
        .map_err(|e| LlmError::ClientBuild(e.to_string()))
}

/// Send a prepared JSON POST and return the body of a 2xx reply.
pub(crate) async fn post_for_body(request: reqwest::RequestBuilder) -> Result<String, LlmError> {
    let response = request.send().await.map_err(|e| LlmError::Transport(e.to_string()))?;
    let status = response.status();
    let body = response.text().await.map_err(|e| LlmError::Transport(e.to_string()))?;
    if !status.is_success() {
        return Err(LlmError::Status { status: status.as_u16(), body });
    }
    Ok(body)
}
