//! Error types for record derivation and schema persistence.

use thiserror::Error;

/// Errors surfaced while deriving or finalizing a record.
#[derive(Error, Debug)]
pub enum ModelError {
    /// Neither `category` nor `name` was supplied, so no class URI exists.
    #[error("value for is_a is not given and cannot be derived: record carries neither a category nor a name")]
    MissingIdentity,

    /// The record has no `uid`, so no instance URI can be composed.
    #[error("record carries no uid; an instance URI cannot be composed")]
    MissingUid,

    /// The configured ontology namespace is not an absolute URI.
    #[error("ontology namespace {0:?} is not an absolute URI")]
    InvalidNamespace(String),

    /// A raw `@context` value had a JSON shape outside
    /// {string, mapping, sequence-of-those}.
    #[error("@context value has an unsupported JSON shape: {0}")]
    InvalidContext(String),

    /// Configuration could not be assembled or re-read after a merge.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Errors raised by a schema store backend.
///
/// Persistence of the default context converts these into the inline
/// fallback; they reach callers only through direct store use.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Filesystem-level failure.
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// The payload could not be serialized.
    #[error("serialization failure: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The backend refused the write or is unreachable.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
