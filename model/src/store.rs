//! Content-addressed schema storage.
//!
//! Schema documents (the default context above all) are stored under a
//! content hash key, so repeated writes across processes and restarts
//! converge on one stored object.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use serde_json::Value;

use crate::error::StoreError;

/// External artifact store for schema documents.
///
/// Implementations must be idempotent per key: re-putting an existing key
/// returns the same reference as the first write, without rewriting.
pub trait SchemaStore: Send + Sync {
    /// Persists `payload` under the content `key`, tagged with a
    /// `logical_name`, and returns a stable reference to the stored copy.
    ///
    /// # Errors
    ///
    /// [`StoreError`] when the backend cannot accept the write. Callers that
    /// persist the default context convert this into the inline fallback.
    fn put_object(
        &self,
        key: &str,
        payload: &Value,
        logical_name: &str,
    ) -> Result<String, StoreError>;
}

/// In-memory schema store.
///
/// Keeps a count of received `put_object` calls.
#[derive(Debug, Default)]
pub struct MemorySchemaStore {
    objects: Mutex<HashMap<String, Value>>,
    puts: AtomicUsize,
}

impl MemorySchemaStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `put_object` calls received so far.
    #[must_use]
    pub fn put_count(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }

    /// Returns the stored payload for `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Value> {
        self.lock_objects().get(key).cloned()
    }

    /// Number of distinct keys stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock_objects().len()
    }

    /// Whether the store holds no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock_objects().is_empty()
    }

    fn lock_objects(&self) -> std::sync::MutexGuard<'_, HashMap<String, Value>> {
        // A poisoned map still holds valid JSON values.
        self.objects
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl SchemaStore for MemorySchemaStore {
    fn put_object(
        &self,
        key: &str,
        payload: &Value,
        logical_name: &str,
    ) -> Result<String, StoreError> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        self.lock_objects()
            .entry(key.to_owned())
            .or_insert_with(|| payload.clone());
        Ok(format!("memory://{logical_name}/{key}"))
    }
}

/// Filesystem schema store.
///
/// Objects land at `<root>/<key>/<logical_name>.json`; an existing path is
/// left untouched and its location returned, which makes re-puts across
/// process restarts converge on the same file.
#[derive(Debug, Clone)]
pub struct FsSchemaStore {
    root: PathBuf,
}

impl FsSchemaStore {
    /// Creates a store rooted at `root`. The directory is created lazily on
    /// the first write.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory all objects are stored under.
    #[must_use]
    pub fn root(&self) -> &std::path::Path {
        &self.root
    }
}

impl SchemaStore for FsSchemaStore {
    fn put_object(
        &self,
        key: &str,
        payload: &Value,
        logical_name: &str,
    ) -> Result<String, StoreError> {
        let dir = self.root.join(key);
        let path = dir.join(format!("{logical_name}.json"));
        if !path.exists() {
            std::fs::create_dir_all(&dir)?;
            std::fs::write(&path, serde_json::to_vec_pretty(payload)?)?;
            tracing::debug!(key, logical_name, "persisted schema object");
        }
        Ok(path.to_string_lossy().into_owned())
    }
}
