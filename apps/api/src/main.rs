mod config;
mod db;
mod errors;
mod llm_client;
mod models;
mod resume;
mod routes;
mod state;
mod suggestion;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::{create_pool, migrate};
use crate::llm_client::LlmClient;
use crate::resume::store::PgResumeStore;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={level},resume_editor={level},tower_http={level}",
                env!("CARGO_CRATE_NAME"),
                level = &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;
    migrate(&db).await?;

    // Initialize LLM client
    let llm = LlmClient::new(
        config.gemini_api_key.clone(),
        &config.gemini_api_url,
        &config.gemini_model,
        config.llm_timeout,
    )?;
    info!(
        "LLM client initialized (model: {}, timeout: {}s)",
        config.gemini_model,
        config.llm_timeout.as_secs()
    );

    let state = AppState {
        llm: Arc::new(llm),
        store: Arc::new(PgResumeStore::new(db)),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
