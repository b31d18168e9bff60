mod analysis;
mod auth;
mod config;
mod db;
mod document;
mod editor;
mod errors;
mod export;
mod models;
mod persistence;
mod render;
mod routes;
mod state;
mod templates;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::{create_pool, ensure_schema};
use crate::persistence::{InMemoryResumeStore, PgResumeStore, ResumeStore};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Vitae API v{}", env!("CARGO_PKG_VERSION"));

    // Saved résumés: Postgres when configured, otherwise process memory
    let store: Arc<dyn ResumeStore> = match &config.database_url {
        Some(url) => {
            let db = create_pool(url, config.database_max_connections).await?;
            ensure_schema(&db).await?;
            Arc::new(PgResumeStore::new(db))
        }
        None => {
            info!("DATABASE_URL not set, saved resumes are kept in memory");
            Arc::new(InMemoryResumeStore::new())
        }
    };

    info!(
        "Template catalog: {} templates, default '{}'",
        templates::list_templates().len(),
        templates::DEFAULT_TEMPLATE_ID
    );

    let state = AppState::new(config.clone(), store);
    state
        .sessions
        .spawn_sweeper(Duration::from_secs(config.session_sweep_interval_secs.max(1)));
    info!(
        "Editor sessions expire after {}s idle",
        config.session_idle_ttl_secs
    );

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the editor frontend has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
