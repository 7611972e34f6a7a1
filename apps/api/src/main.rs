mod config;
mod errors;
mod interview;
mod llm_client;
mod report;
mod resume;
mod routes;
mod speech;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::interview::generator::LlmQuestionGenerator;
use crate::interview::store::SessionStore;
use crate::llm_client::LlmClient;
use crate::report::engine::LlmInterviewScorer;
use crate::resume::profile::LlmProfileExtractor;
use crate::routes::build_router;
use crate::speech::HttpTranscriber;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Parley API v{}", env!("CARGO_PKG_VERSION"));

    // Single LLM client shared by profile extraction, question generation,
    // and interview scoring
    let llm = LlmClient::new(config.anthropic_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let transcriber = HttpTranscriber::new(
        config.transcription_url.clone(),
        config.transcription_api_key.clone(),
    );
    info!(
        "Transcription client initialized ({})",
        config.transcription_url
    );

    // Build app state
    let state = AppState {
        sessions: Arc::new(SessionStore::new()),
        profile_extractor: Arc::new(LlmProfileExtractor::new(llm.clone())),
        question_generator: Arc::new(LlmQuestionGenerator::new(llm.clone())),
        scorer: Arc::new(LlmInterviewScorer::new(llm)),
        transcriber: Arc::new(transcriber),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
