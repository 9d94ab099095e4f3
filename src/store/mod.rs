// ABOUTME: File store capability consumed by the template compiler
// ABOUTME: Defines the FileStore trait plus local filesystem and in-memory implementations

pub mod error;
pub mod local;
pub mod memory;

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use std::path::Path;
use tracing::warn;

pub use error::{Result, StoreError};
pub use local::LocalFileStore;
pub use memory::MemoryFileStore;

/// Narrow read-only view of a document store.
///
/// The compiler only ever asks three questions of its store: does a document
/// exist, what are its bytes, and what JSON does it hold.
#[async_trait]
pub trait FileStore: Send + Sync {
    async fn exists(&self, path: &Path) -> bool;

    async fn read(&self, path: &Path) -> Result<Vec<u8>>;

    /// Read a document as JSON. Empty or malformed content yields an empty
    /// object; read failures still propagate.
    async fn read_json(&self, path: &Path) -> Result<JsonValue> {
        let bytes = self.read(path).await?;
        Ok(parse_json_or_empty(path, &bytes))
    }
}

pub(crate) fn parse_json_or_empty(path: &Path, bytes: &[u8]) -> JsonValue {
    let empty = || JsonValue::Object(serde_json::Map::new());

    if bytes.iter().all(u8::is_ascii_whitespace) {
        return empty();
    }

    match serde_json::from_slice::<JsonValue>(bytes) {
        Ok(JsonValue::Null) => empty(),
        Ok(value) => value,
        Err(e) => {
            warn!(
                "Ignoring malformed JSON in {}: {}",
                path.display(),
                e
            );
            empty()
        }
    }
}
