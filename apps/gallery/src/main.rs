mod carousel;
mod config;
mod errors;
mod feed;
mod fit;
#[cfg(test)]
mod fixtures;
mod models;
mod routes;
mod sessions;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::feed::{load_exhibitors_or_empty, FileFeedSource};
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

    info!("Starting exhibitor gallery v{}", env!("CARGO_PKG_VERSION"));

    // Load the exhibitor feed once at startup; a broken feed leaves the gallery empty
    let feed = Arc::new(FileFeedSource::new(&config.feed_path));
    let records = load_exhibitors_or_empty(feed.as_ref()).await;
    info!(
        "Gallery ready: {} exhibitors, {} per page",
        records.len(),
        carousel::PAGE_SIZE
    );

    let state = AppState::new(config.clone(), feed, records);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
