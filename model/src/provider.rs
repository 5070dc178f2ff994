//! Process-wide default-context provisioning.
//!
//! The default context document is persisted to the schema store once per
//! process; every record finalized afterwards reuses the stored reference.
//! The provider is an explicit service, not a module global: the store it
//! persists through is injected at construction.

use std::sync::{Arc, OnceLock};

use padre_onto_vocab::{jsonld, Vocabulary};
use sha2::{Digest, Sha256};

use crate::context::ContextEntry;
use crate::store::SchemaStore;

/// Logical name under which the default context document is stored.
///
/// Existing stores are queried by this name; changing it orphans every
/// previously persisted copy.
pub const DEFAULT_CONTEXT_SCHEMA_NAME: &str = "pypads_context_default";

/// Lazily persists the default context and hands out a reference to it.
pub struct DefaultContextProvider {
    vocabulary: Vocabulary,
    store: Arc<dyn SchemaStore>,
    handle: OnceLock<ContextEntry>,
}

impl DefaultContextProvider {
    /// Creates a provider over `vocabulary`, persisting through `store`.
    #[must_use]
    pub fn new(vocabulary: Vocabulary, store: Arc<dyn SchemaStore>) -> Self {
        Self {
            vocabulary,
            store,
            handle: OnceLock::new(),
        }
    }

    /// The vocabulary this provider serves. Its namespace is also the base
    /// for URI derivation.
    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Content key of the default context document: hex-encoded SHA-256 of
    /// its canonical textual form.
    #[must_use]
    pub fn content_key(&self) -> String {
        let text = jsonld::canonical_text(&self.vocabulary);
        hex::encode(Sha256::digest(text.as_bytes()))
    }

    /// Returns the entry to inject as the default `@context`.
    ///
    /// The first successful call persists the context document and memoizes
    /// the returned reference; later calls return the cached reference
    /// without touching the store. When persistence fails, the literal
    /// inline mapping is returned for this call only and nothing is cached,
    /// so the next call retries the store. Concurrent first calls may race
    /// to persist; the write is content-addressed, and whichever entry lands
    /// in the cache first is handed out from then on.
    #[must_use]
    pub fn default_context(&self) -> ContextEntry {
        if let Some(cached) = self.handle.get() {
            return cached.clone();
        }
        let document = jsonld::to_context_document(&self.vocabulary);
        match self
            .store
            .put_object(&self.content_key(), &document, DEFAULT_CONTEXT_SCHEMA_NAME)
        {
            Ok(reference) => {
                let entry = ContextEntry::Reference(reference);
                let _ = self.handle.set(entry.clone());
                self.handle.get().cloned().unwrap_or(entry)
            }
            Err(error) => {
                tracing::warn!(
                    %error,
                    "failed to persist the default context; using the inline mapping"
                );
                ContextEntry::Inline(jsonld::context_mapping(&self.vocabulary))
            }
        }
    }
}

impl std::fmt::Debug for DefaultContextProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultContextProvider")
            .field("namespace", &self.vocabulary.namespace)
            .field("cached", &self.handle.get().is_some())
            .finish()
    }
}
