mod assessment;
mod config;
mod db;
mod errors;
mod models;
mod routes;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{DocumentStore, PgDocumentStore};

const DEFAULT_STORE_NAME: &str = "pathfinder";

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

    info!("Starting Career Pathfinder API v{}", env!("CARGO_PKG_VERSION"));

    let store = build_store(&config).await?;

    let state = AppState {
        store,
        config: config.clone(),
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

/// Builds the result store, if one is configured.
/// An unreachable database is not fatal: writes will fail and be skipped per request.
async fn build_store(config: &Config) -> Result<Option<Arc<dyn DocumentStore>>> {
    let Some(url) = config.database_url.as_deref() else {
        warn!("DATABASE_URL not set; assessment results will not be stored");
        return Ok(None);
    };

    let pool = create_pool(url)?;

    let name = config
        .database_name
        .clone()
        .unwrap_or_else(|| DEFAULT_STORE_NAME.to_string());
    let store = PgDocumentStore::new(pool, name.clone());

    // retried on first store use if the database is down now
    if let Err(e) = store.prepare().await {
        warn!("Could not prepare document schema yet: {e}");
    }
    info!("Result store configured (name: {name})");

    Ok(Some(Arc::new(store)))
}
