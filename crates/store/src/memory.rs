use crate::error::{Result, StoreError};
use crate::ConfigStore;
use std::sync::{Arc, Mutex};

/// In-memory config store, used in place of the file system in tests
///
/// Clones share the same contents.
#[derive(Debug, Clone, Default)]
pub struct MemoryConfigStore {
    contents: Arc<Mutex<Option<Vec<u8>>>>,
}

impl MemoryConfigStore {
    /// Create an empty store, equivalent to a missing config file
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `contents`
    #[must_use]
    pub fn with_contents(contents: impl Into<Vec<u8>>) -> Self {
        Self {
            contents: Arc::new(Mutex::new(Some(contents.into()))),
        }
    }

    /// Last written contents, `None` if nothing was ever written
    pub fn contents(&self) -> Result<Option<Vec<u8>>> {
        self.contents
            .lock()
            .map(|guard| guard.clone())
            .map_err(|e| StoreError::Internal(format!("memory store lock poisoned: {e}")))
    }

    /// Last written contents decoded as UTF-8
    pub fn contents_string(&self) -> Result<Option<String>> {
        self.contents()?
            .map(|bytes| {
                String::from_utf8(bytes)
                    .map_err(|e| StoreError::Internal(format!("stored contents are not UTF-8: {e}")))
            })
            .transpose()
    }
}

impl ConfigStore for MemoryConfigStore {
    async fn write(&self, contents: &[u8]) -> Result<()> {
        let mut guard = self
            .contents
            .lock()
            .map_err(|e| StoreError::Internal(format!("memory store lock poisoned: {e}")))?;
        *guard = Some(contents.to_vec());
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
