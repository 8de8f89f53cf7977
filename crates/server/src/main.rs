use anyhow::Result;
use mediadock_core::ConfigService;
use mediadock_server::{AppState, Config};
use mediadock_store::FileConfigStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing with INFO level by default
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = Config::load_default()?;

    tracing::info!("MediaDock server starting...");
    tracing::info!("Serving files from: {}", config.storage.root.display());
    tracing::info!(
        "Saving configuration to: {}",
        config.storage.config_path().display()
    );

    let store = FileConfigStore::new(config.storage.config_path());
    let state = AppState::new(ConfigService::new(store), &config.storage.root);
    let router = mediadock_server::create_router(state);

    let listener = mediadock_server::bind(config.server.socket_addr()?)?;
    mediadock_server::serve(listener, router, mediadock_server::shutdown_signal()).await
}
