mod analysis;
mod config;
mod errors;
mod extract;
mod keywords;
mod llm_client;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::analyzer::LlmResumeAnalyzer;
use crate::config::Config;
use crate::keywords::matcher::KeywordMatcher;
use crate::keywords::vocabulary::KeywordVocabulary;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("resume_api={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting Resume Optimizer API v{}",
        env!("CARGO_PKG_VERSION")
    );

    // Compile the fixed keyword vocabulary once; every request reads it, nothing mutates it
    let vocabulary = KeywordVocabulary::builtin();
    let matcher = Arc::new(KeywordMatcher::new(&vocabulary)?);
    info!(
        "Keyword matcher compiled ({} technical keywords, {} action verbs)",
        vocabulary.technical_keyword_count(),
        vocabulary.action_verbs().len()
    );

    // Initialize the LLM client and the analyzer backend built on it
    let llm = LlmClient::new(config.openai_api_key.clone());
    let analyzer = Arc::new(LlmResumeAnalyzer::new(llm));
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Build app state
    let state = AppState {
        analyzer,
        matcher,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS once the frontend origin is pinned

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
