//! Renders a [`Vocabulary`] as a JSON-LD context document.
//!
//! The document shape is `{"@context": { term: binding, … }}` where a binding
//! is either a direct IRI string or an object carrying `@id` and `@type`.
//! [`canonical_text`] is the hashing input for content addressing: serde_json
//! maps iterate in sorted key order, so the compact rendering is stable across
//! processes and releases as long as the bindings themselves are unchanged.

use serde_json::{json, Map, Value};

use crate::model::{TermBinding, Vocabulary};

/// Builds the inner `@context` mapping for `vocab`.
#[must_use]
pub fn context_mapping(vocab: &Vocabulary) -> Map<String, Value> {
    let mut ctx = Map::new();
    for term in &vocab.terms {
        let binding = match &term.binding {
            TermBinding::Keyword(kw) => json!(kw),
            TermBinding::Prefix(iri) => json!(iri),
            TermBinding::Typed { id, datatype } => json!({
                "@id": id,
                "@type": datatype,
            }),
        };
        ctx.insert(term.name.to_owned(), binding);
    }
    ctx
}

/// Builds the full context document: `{"@context": …}`.
#[must_use]
pub fn to_context_document(vocab: &Vocabulary) -> Value {
    json!({ "@context": context_mapping(vocab) })
}

/// Returns the canonical textual form of the context document.
///
/// This is the input to the content hash that addresses the persisted
/// document, so it must stay byte-identical for identical bindings.
#[must_use]
pub fn canonical_text(vocab: &Vocabulary) -> String {
    to_context_document(vocab).to_string()
}
