mod analysis;
mod assistant;
mod config;
mod errors;
mod extraction;
mod llm_client;
mod presets;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::assistant::{Assistant, LlmAssistant, RuleBasedAssistant};
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::presets::PresetRegistry;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("nuvora_api={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Nuvora API v{}", env!("CARGO_PKG_VERSION"));

    // Load the preset registry (static, read-only for the process lifetime)
    let presets = Arc::new(PresetRegistry::builtin());
    info!("Preset registry loaded ({} profiles)", presets.len());

    // Pick the chat assistant backend: LLM-backed when a key is configured,
    // rule-based otherwise
    let assistant: Arc<dyn Assistant> = match &config.anthropic_api_key {
        Some(api_key) => {
            info!("Chat assistant: LLM-backed (model: {})", llm_client::MODEL);
            Arc::new(LlmAssistant::new(LlmClient::new(api_key.clone())))
        }
        None => {
            info!("Chat assistant: rule-based (ANTHROPIC_API_KEY not set)");
            Arc::new(RuleBasedAssistant)
        }
    };

    // Build app state
    let state = AppState { presets, assistant };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
