mod autosave;
mod config;
mod db;
mod errors;
mod export;
mod form;
mod models;
mod persistence;
mod rasterizer;
mod render;
mod routes;
mod state;
mod validation;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::form::session::SessionRegistry;
use crate::persistence::{DocumentStore, PgDocumentStore};
use crate::rasterizer::RasterClient;
use crate::routes::build_router;
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

    info!("Starting ResumeForge API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL-backed document store
    let pool = create_pool(&config.database_url).await?;
    let store: Arc<dyn DocumentStore> = Arc::new(PgDocumentStore::new(pool));
    info!("Document store initialized");

    // Initialize rasterizer client
    let rasterizer = RasterClient::new(config.rasterizer_url.clone());
    info!("Rasterizer client initialized ({})", config.rasterizer_url);

    // Session registry owns per-user form state and autosave tasks
    let autosave_delay = Duration::from_millis(config.autosave_delay_ms);
    let sessions = Arc::new(SessionRegistry::new(store.clone(), autosave_delay));
    info!("Autosave debounce window: {}ms", config.autosave_delay_ms);

    // Build app state
    let state = AppState {
        sessions,
        store,
        rasterizer,
        config: config.clone(),
    };

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
