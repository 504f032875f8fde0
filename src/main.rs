use std::sync::Arc;

use anyhow::Context;
use outfit_api::{
    config::Config,
    routes::create_router,
    services::{Catalog, FileRatingsStore, RatingsStore, RedisRatingsStore},
    state::AppState,
    telemetry,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    telemetry::init(&config.log_level)?;

    let catalog = match &config.catalog_path {
        Some(path) => Catalog::from_file(path)
            .await
            .with_context(|| format!("Failed to load catalog from {}", path))?,
        None => Catalog::embedded().context("Failed to load embedded catalog")?,
    };

    let ratings: Arc<dyn RatingsStore> = match &config.redis_url {
        Some(url) => Arc::new(RedisRatingsStore::new(url).context("Invalid REDIS_URL")?),
        None => Arc::new(
            FileRatingsStore::open(&config.ratings_path)
                .await
                .with_context(|| format!("Failed to open ratings file {}", config.ratings_path))?,
        ),
    };

    tracing::info!(
        outfits = catalog.len(),
        ratings_store = ratings.name(),
        "Loaded outfit catalog"
    );

    let state = AppState::new(catalog, ratings).with_max_upload_bytes(config.max_upload_bytes);
    let app = create_router(state);

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(%addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
