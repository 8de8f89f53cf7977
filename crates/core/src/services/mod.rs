mod config;

pub use config::{ConfigError, ConfigService};
