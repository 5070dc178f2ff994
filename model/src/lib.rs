//! Ontology record model for linked-data experiment tracking.
//!
//! The `padre-onto-model` crate annotates tracked experiment metadata —
//! parameters, metrics, tags, artifacts, logger calls — with stable
//! semantic-web identifiers and JSON-LD context, so tracked runs can be
//! published and queried as RDF.
//!
//! Records are built in two phases: raw fields are assembled on a
//! [`RecordDraft`], then [`RecordDraft::finalize`] derives the class URI
//! (`is_a`) and instance URI, injects the process-wide default context, and
//! returns an immutable [`OntologyRecord`]. The default context document is
//! persisted once per process to a content-addressed [`SchemaStore`] through
//! the [`DefaultContextProvider`].
//!
//! ```
//! use std::sync::Arc;
//! use padre_onto_model::{DefaultContextProvider, MemorySchemaStore, RecordDraft};
//! use padre_onto_vocab::Vocabulary;
//!
//! let provider = DefaultContextProvider::new(
//!     Vocabulary::standard().clone(),
//!     Arc::new(MemorySchemaStore::new()),
//! );
//! let record = RecordDraft::parameter("b6cc1e").finalize(&provider)?;
//! assert_eq!(
//!     record.uri(),
//!     "http://rdf.padre-lab.eu/pypads/ontology/Parameter#b6cc1e"
//! );
//! assert!(record.context().is_some());
//! # Ok::<(), padre_onto_model::ModelError>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod config;
pub mod context;
pub mod error;
pub mod kinds;
pub mod provider;
pub mod record;
pub mod store;
pub mod uri;

pub use config::OntoConfig;
pub use context::{resolve_context, ContextEntry, ContextValue};
pub use error::{ModelError, StoreError};
pub use kinds::{AbstractionKind, StorageKind};
pub use provider::{DefaultContextProvider, DEFAULT_CONTEXT_SCHEMA_NAME};
pub use record::{OntologyRecord, RecordDraft};
pub use store::{FsSchemaStore, MemorySchemaStore, SchemaStore};
