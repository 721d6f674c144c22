mod analysis;
mod config;
mod errors;
mod llm_client;
mod models;
mod retrieval;
mod routes;
mod state;
mod status;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::pipeline::PipelineConfig;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::retrieval::ranker::LexicalRanker;
use crate::retrieval::{chunker, AchievementIndex, Retriever};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting fitcheck API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = LlmClient::new(config.anthropic_api_key.clone())
        .map_err(|e| anyhow::anyhow!("failed to build LLM client: {e}"))?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Build the achievement index once; a failed build is remembered so
    // analysis runs report `error` instead of looking unconfigured.
    let retriever = build_retriever(&config).await;

    let state = AppState {
        llm,
        retriever: Arc::new(retriever),
        pipeline: PipelineConfig {
            max_resume_chars: config.max_resume_chars,
            retrieval_k: config.retrieval_k,
        },
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Loads the achievements corpus (if configured) and builds the index.
async fn build_retriever(config: &Config) -> Retriever {
    let Some(path) = &config.achievements_path else {
        info!("no achievements corpus configured, retrieval disabled");
        return Retriever::Disabled;
    };

    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            warn!("failed to read achievements corpus at {path}: {e}");
            return Retriever::Failed(format!("cannot read corpus file: {e}"));
        }
    };

    let records = chunker::split_corpus(&text);
    match AchievementIndex::build(&records, Arc::new(LexicalRanker)).await {
        Ok(index) => {
            info!("achievement retrieval ready ({} chunks)", index.len());
            Retriever::Ready(index)
        }
        Err(e) => {
            warn!("achievement index build failed: {e}");
            Retriever::Failed(e.to_string())
        }
    }
}
