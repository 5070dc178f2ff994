//! Two-phase ontology record construction.
//!
//! Raw fields are assembled on a [`RecordDraft`]; [`RecordDraft::finalize`]
//! derives the identity fields, resolves the `@context`, and returns an
//! immutable [`OntologyRecord`]. A record that reaches a consumer therefore
//! always carries a class URI, an instance URI, and — unless its kind is
//! excluded — the default context.

use serde::Serialize;

use crate::context::{self, ContextValue};
use crate::error::ModelError;
use crate::kinds::{categories, AbstractionKind, StorageKind};
use crate::provider::DefaultContextProvider;
use crate::uri;

/// Raw fields of a knowledge-base record, prior to derivation.
#[derive(Debug, Clone, Default)]
pub struct RecordDraft {
    /// Unique identifier, supplied by the surrounding identity layer.
    pub uid: Option<String>,
    /// Human-readable class label; primary source for `is_a`.
    pub category: Option<String>,
    /// Human-readable instance label; fallback source for `is_a`.
    pub name: Option<String>,
    /// Explicit class URI; set to skip derivation.
    pub is_a: Option<String>,
    /// Explicit instance URI; set to skip derivation.
    pub uri: Option<String>,
    /// Storage classification; `None` finalizes as [`StorageKind::Embedded`].
    pub storage_kind: Option<StorageKind>,
    /// Abstraction classification; `None` is treated as a concrete record.
    pub abstraction_kind: Option<AbstractionKind>,
    /// Caller-supplied `@context` value, if any.
    pub context: Option<ContextValue>,
}

impl RecordDraft {
    /// Starts a draft of the given storage kind.
    #[must_use]
    pub fn new(storage_kind: StorageKind) -> Self {
        Self {
            storage_kind: Some(storage_kind),
            ..Self::default()
        }
    }

    /// Starts a draft for a record nested inside a parent payload. The
    /// storage kind is left unset and defaults to embedded at finalization.
    #[must_use]
    pub fn embedded() -> Self {
        Self::default()
    }

    /// Starts a parameter draft with its standard category label.
    #[must_use]
    pub fn parameter(uid: impl Into<String>) -> Self {
        Self::new(StorageKind::Parameter)
            .with_category(categories::PARAMETER)
            .with_uid(uid)
    }

    /// Starts a metric draft with its standard category label.
    #[must_use]
    pub fn metric(uid: impl Into<String>) -> Self {
        Self::new(StorageKind::Metric)
            .with_category(categories::METRIC)
            .with_uid(uid)
    }

    /// Starts a tag draft with its standard category label.
    #[must_use]
    pub fn tag(uid: impl Into<String>) -> Self {
        Self::new(StorageKind::Tag)
            .with_category(categories::TAG)
            .with_uid(uid)
    }

    /// Starts an artifact draft with its standard category label.
    #[must_use]
    pub fn artifact(uid: impl Into<String>) -> Self {
        Self::new(StorageKind::Artifact)
            .with_category(categories::ARTIFACT)
            .with_uid(uid)
    }

    /// Starts a logger-call draft with its standard category label.
    #[must_use]
    pub fn logger_call(uid: impl Into<String>) -> Self {
        Self::new(StorageKind::LoggerCall)
            .with_category(categories::LOGGER_CALL)
            .with_uid(uid)
    }

    /// Sets the unique identifier.
    #[must_use]
    pub fn with_uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = Some(uid.into());
        self
    }

    /// Sets the class label.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the instance label.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Supplies the class URI directly, skipping derivation from labels.
    #[must_use]
    pub fn with_is_a(mut self, is_a: impl Into<String>) -> Self {
        self.is_a = Some(is_a.into());
        self
    }

    /// Supplies the instance URI directly, skipping derivation.
    #[must_use]
    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    /// Sets the abstraction classification.
    #[must_use]
    pub fn with_abstraction(mut self, abstraction: AbstractionKind) -> Self {
        self.abstraction_kind = Some(abstraction);
        self
    }

    /// Sets a caller-supplied `@context` value.
    #[must_use]
    pub fn with_context(mut self, context: ContextValue) -> Self {
        self.context = Some(context);
        self
    }

    /// Derives identity and context, returning the finished record.
    ///
    /// The class URI comes from an explicit `is_a` or is derived from
    /// `category`/`name` against the provider's namespace; the instance URI
    /// comes from an explicit `uri` or is composed as `is_a + "#" + uid`.
    /// Contextualizable kinds then receive the default context; excluded
    /// kinds keep their context untouched, and the store is never contacted
    /// for them.
    ///
    /// # Errors
    ///
    /// [`ModelError::MissingIdentity`] when no class URI is given or
    /// derivable; [`ModelError::MissingUid`] when the instance URI must be
    /// derived but no `uid` is present; [`ModelError::InvalidNamespace`]
    /// when the provider's namespace is not an absolute URI.
    pub fn finalize(self, provider: &DefaultContextProvider) -> Result<OntologyRecord, ModelError> {
        let storage_kind = self.storage_kind.unwrap_or(StorageKind::Embedded);

        let is_a = match self.is_a {
            Some(explicit) => explicit,
            None => uri::derive_is_a(
                self.category.as_deref(),
                self.name.as_deref(),
                &provider.vocabulary().namespace,
            )?,
        };

        let uri = match self.uri {
            Some(explicit) => explicit,
            None => {
                let uid = self.uid.as_deref().ok_or(ModelError::MissingUid)?;
                uri::derive_uri(&is_a, uid)
            }
        };

        let context = if context::requires_contextualization(storage_kind, self.abstraction_kind) {
            context::resolve_context(
                storage_kind,
                self.abstraction_kind,
                self.context,
                &provider.default_context(),
            )
        } else {
            self.context
        };

        Ok(OntologyRecord {
            uri,
            is_a,
            category: self.category,
            name: self.name,
            uid: self.uid,
            storage_kind,
            abstraction_kind: self.abstraction_kind,
            context,
        })
    }
}

/// A finished, immutable knowledge-base record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OntologyRecord {
    uri: String,
    is_a: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    uid: Option<String>,
    storage_kind: StorageKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    abstraction_kind: Option<AbstractionKind>,
    #[serde(rename = "@context", skip_serializing_if = "Option::is_none")]
    context: Option<ContextValue>,
}

impl OntologyRecord {
    /// The instance URI identifying this record.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// The class URI of this record.
    #[must_use]
    pub fn is_a(&self) -> &str {
        &self.is_a
    }

    /// The class label, if one was supplied.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// The instance label, if one was supplied.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The unique identifier, if one was supplied.
    #[must_use]
    pub fn uid(&self) -> Option<&str> {
        self.uid.as_deref()
    }

    /// The storage classification.
    #[must_use]
    pub fn storage_kind(&self) -> StorageKind {
        self.storage_kind
    }

    /// The abstraction classification, if any.
    #[must_use]
    pub fn abstraction_kind(&self) -> Option<AbstractionKind> {
        self.abstraction_kind
    }

    /// The resolved `@context` value, if any.
    #[must_use]
    pub fn context(&self) -> Option<&ContextValue> {
        self.context.as_ref()
    }
}
