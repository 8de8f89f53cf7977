mod config;
mod error;
mod handlers;
mod routes;
mod server;

pub use config::{Config, ServerConfig, StorageConfig};
pub use error::ApiError;
pub use handlers::SAVE_CONFIG_PATH;
pub use routes::create_router;
pub use server::{bind, serve, shutdown_signal};

use mediadock_core::ConfigService;
use mediadock_store::ConfigStore;
use std::path::Path;
use tower_http::services::ServeDir;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState<S> {
    pub config: ConfigService<S>,
    pub static_files: ServeDir,
}

impl<S: ConfigStore> AppState<S> {
    /// Serve static files from `root` and save through `config`
    #[must_use]
    pub fn new(config: ConfigService<S>, root: impl AsRef<Path>) -> Self {
        Self {
            config,
            static_files: ServeDir::new(root),
        }
    }
}
