use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vidrelay_core::{
    load_config, validate_config, DriveStore, RelayPipeline, RemoteStore, SourceProvider,
    StagingArea, VimeoProvider, YtdlpProvider,
};

use vidrelay_server::api::create_router;
use vidrelay_server::state::AppState;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine config path
    let config_path = std::env::var("VIDRELAY_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.toml"));

    // Load configuration
    info!("Loading configuration from {:?}", config_path);
    let config = load_config(&config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    // Validate configuration
    validate_config(&config).context("Configuration validation failed")?;

    info!("Configuration loaded successfully");
    info!("Staging root: {:?}", config.staging.root);
    info!("yt-dlp binary: {}", config.ytdlp.binary);

    // Create source providers
    let youtube_provider: Arc<dyn SourceProvider> =
        Arc::new(YtdlpProvider::new(config.ytdlp.clone()));
    let vimeo_provider: Arc<dyn SourceProvider> = Arc::new(
        VimeoProvider::new(config.vimeo.clone()).context("Failed to create Vimeo provider")?,
    );

    // Create remote store
    let store: Arc<dyn RemoteStore> =
        Arc::new(DriveStore::new(&config.drive).context("Failed to create Drive store")?);
    info!("Remote store initialized: {}", store.name());

    // Create relay pipeline over the staging area
    let pipeline = RelayPipeline::new(StagingArea::new(&config.staging.root), store);

    // Create app state
    let state = Arc::new(AppState::new(
        config.clone(),
        youtube_provider,
        vimeo_provider,
        pipeline,
    ));

    // Create router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(config.server.host, config.server.port);
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shut down");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
