use anyhow::{Context, Result};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// `MediaDock` server configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Listener configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Where static files are served from and the config document is saved
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Listener binding configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// HTTP bind address
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// HTTP port
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory served over GET; the config file lives here too
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Name of the saved configuration document, relative to `root`
    #[serde(default = "default_config_file")]
    pub config_file: PathBuf,
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_config_file() -> PathBuf {
    PathBuf::from("config.json")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            config_file: default_config_file(),
        }
    }
}

impl ServerConfig {
    /// Socket address to listen on
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.bind_address, self.port)
            .parse()
            .with_context(|| {
                format!(
                    "Invalid bind address: {}:{}",
                    self.bind_address, self.port
                )
            })
    }
}

impl StorageConfig {
    /// Full path of the saved configuration document
    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        self.root.join(&self.config_file)
    }
}

impl Config {
    /// Load configuration from file, falling back to defaults
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::info!(
                "Settings file not found at {}, using defaults",
                path.display()
            );
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse settings file: {}", path.display()))?;

        tracing::info!("Loaded settings from {}", path.display());
        Ok(config)
    }

    /// Load from default locations in order:
    /// 1. ./mediadock.toml (current directory)
    /// 2. /etc/mediadock/config.toml (system-wide)
    /// 3. Built-in defaults
    pub fn load_default() -> Result<Self> {
        let paths = [
            PathBuf::from("./mediadock.toml"),
            PathBuf::from("/etc/mediadock/config.toml"),
        ];

        for path in paths {
            if path.exists() {
                return Self::load(&path);
            }
        }

        tracing::info!("No settings file found, using built-in defaults");
        Ok(Self::default())
    }
}
