use mediadock_store::{ConfigStore, StoreError};
use serde_json::Value;
use thiserror::Error;
use tracing::info;

/// Reasons a configuration save can fail
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Request body is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    #[error("Invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Service for persisting the configuration document
///
/// The service holds no document of its own. Each save decodes the request
/// body, re-renders it and hands the result to the injected store, so the
/// store never sees input that failed to parse.
#[derive(Debug, Clone)]
pub struct ConfigService<S> {
    store: S,
}

impl<S: ConfigStore> ConfigService<S> {
    /// Create a new `ConfigService` writing through `store`
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Decode a raw request body into a JSON document
    ///
    /// Any JSON value is accepted, objects are expected but not required.
    pub fn parse(body: &[u8]) -> Result<Value, ConfigError> {
        let text = std::str::from_utf8(body)?;
        Ok(serde_json::from_str(text)?)
    }

    /// Render a document the way it is written to disk: two-space indent,
    /// keys in their original order, numbers exactly as posted, no trailing
    /// newline
    pub fn render(document: &Value) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(document)?)
    }

    /// Parse `body` and overwrite the stored configuration with it
    ///
    /// # Returns
    /// * `Ok(Value)` - The document that was written
    /// * `Err(ConfigError::Encoding)` / `Err(ConfigError::Parse)` - Body rejected, store untouched
    /// * `Err(ConfigError::Store)` - Write failed, stored contents are unspecified
    pub async fn save(&self, body: &[u8]) -> Result<Value, ConfigError> {
        let document = Self::parse(body)?;
        let rendered = Self::render(&document)?;

        self.store.write(rendered.as_bytes()).await?;

        info!(
            "Saved configuration ({} bytes) to {}",
            rendered.len(),
            self.store.location()
        );
        Ok(document)
    }
}
