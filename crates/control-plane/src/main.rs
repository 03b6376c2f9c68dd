// Evaluations API server
// Decision: DATABASE_URL selects PostgreSQL; without it the server runs in
// dev mode on the in-memory store

use anyhow::{Context, Result};
use evaluations_control_plane::storage::StorageBackend;
use evaluations_control_plane::{build_app, ServerConfig};
use evaluations_core::{HttpPeerDirectory, PeerDirectoryConfig};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Optional .env file for local development
    let _ = dotenvy::dotenv();

    // RUST_LOG overrides the default filter
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "evaluations_control_plane=debug,evaluations_core=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("evaluations-api starting...");

    let config = ServerConfig::from_env()?;

    let storage = match &config.database_url {
        Some(url) => StorageBackend::postgres(url)
            .await
            .context("Failed to connect to database")?,
        None => StorageBackend::in_memory(),
    };

    if storage.is_dev_mode() {
        tracing::warn!("DATABASE_URL not set, running in dev mode with in-memory storage");
    } else {
        storage.migrate().await?;
        tracing::info!("Connected to database");
    }

    let peer_config = PeerDirectoryConfig::from_env()?;
    tracing::info!(
        base_url = %peer_config.base_url,
        timeout = ?peer_config.timeout,
        policy = %config.enrichment_policy,
        "Peer directory configured"
    );
    let peers = HttpPeerDirectory::new(peer_config).context("Failed to build peer client")?;

    let app = build_app(&config, storage, Arc::new(peers));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .context("Failed to bind to address")?;
    tracing::info!("HTTP server listening on {}", config.bind_addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
