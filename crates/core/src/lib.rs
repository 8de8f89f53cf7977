mod services;

pub use services::{ConfigError, ConfigService};
