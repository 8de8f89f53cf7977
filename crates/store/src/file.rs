use crate::error::{Result, StoreError};
use crate::ConfigStore;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Config store backed by a single file on disk
///
/// Each write truncates (or creates) the file and writes the new contents in
/// place. A failure part way through can leave the file truncated.
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: Arc<PathBuf>,
}

impl FileConfigStore {
    /// Create a store writing to `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStore for FileConfigStore {
    async fn write(&self, contents: &[u8]) -> Result<()> {
        tokio::fs::write(self.path.as_path(), contents)
            .await
            .map_err(|source| StoreError::Io {
                path: self.path.to_path_buf(),
                source,
            })?;

        debug!("Wrote {} bytes to {}", contents.len(), self.path.display());
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
