mod error;
mod file;
mod memory;

pub use error::{Result, StoreError};
pub use file::FileConfigStore;
pub use memory::MemoryConfigStore;

use std::future::Future;

/// Destination for rendered configuration documents
///
/// The store only ever replaces its contents wholesale. Writes are not
/// serialized: two overlapping writes race and the last one wins.
pub trait ConfigStore: Clone + Send + Sync + 'static {
    /// Replace the stored document with `contents`
    fn write(&self, contents: &[u8]) -> impl Future<Output = Result<()>> + Send;

    /// Human readable location, used in log lines
    fn location(&self) -> String;
}
