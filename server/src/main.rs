#![recursion_limit = "256"]

mod config;
mod llm;
mod rate_limit;
mod routes;
mod services;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env is normal in production; real env vars win either way.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")))
        .init();

    let config = config::ServerConfig::from_env()?;
    if !config.identity.is_configured() {
        tracing::warn!("IDENTITY_URL / IDENTITY_ANON_KEY not set; sign-in will be unavailable");
    }

    // Initialize LLM client (non-fatal: insight generation disabled if config missing).
    let llm: Option<Arc<dyn llm::JsonModel>> = match llm::LlmClient::from_env() {
        Ok(client) => {
            tracing::info!(model = client.model(), "LLM client initialized");
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::warn!(error = %e, "LLM client not configured; insight generation disabled");
            None
        }
    };

    let rate_limiter = rate_limit::RateLimiter::new(rate_limit::RateLimitConfig::from_env());
    let limits = rate_limiter.config();
    tracing::info!(
        per_caller = limits.per_caller_limit,
        global = limits.global_limit,
        trust_forwarded_for = config.trust_forwarded_for,
        "insight rate limits configured"
    );
    let port = config.port;
    let state = state::AppState::new(config, llm, rate_limiter);

    let app = routes::leptos_app(state)?;
    let listener = tokio::net::TcpListener::bind(SocketAddr::from(([0, 0, 0, 0], port))).await?;

    tracing::info!(%port, "primecfo listening");
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>()).await?;
    Ok(())
}
