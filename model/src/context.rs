//! `@context` values and default-context injection.
//!
//! Every first-class record published to the knowledge base must carry the
//! process-wide default context so its terms resolve to the tracking
//! vocabulary. [`resolve_context`] injects that default while leaving
//! caller-supplied contexts in place, and passes embedded records,
//! repository entries, and reference stubs through untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ModelError;
use crate::kinds::{AbstractionKind, StorageKind};

/// A single `@context` reference: a remote context document or an inline
/// term mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContextEntry {
    /// URI or path of a context document.
    Reference(String),
    /// An inline JSON-LD term mapping.
    Inline(Map<String, Value>),
}

/// The `@context` field of a record: a single entry or an ordered sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContextValue {
    /// A single context reference.
    One(ContextEntry),
    /// An ordered sequence of context references.
    Many(Vec<ContextEntry>),
}

impl ContextEntry {
    /// Reads an entry from raw JSON.
    ///
    /// # Errors
    ///
    /// [`ModelError::InvalidContext`] for any JSON value that is neither a
    /// string nor an object. Such input is a caller bug, not data to guess at.
    pub fn from_json(value: Value) -> Result<Self, ModelError> {
        match value {
            Value::String(s) => Ok(ContextEntry::Reference(s)),
            Value::Object(map) => Ok(ContextEntry::Inline(map)),
            other => Err(ModelError::InvalidContext(format!(
                "expected string or mapping, got {other}"
            ))),
        }
    }
}

impl ContextValue {
    /// Reads a context field from raw JSON. `null` reads as absent.
    ///
    /// # Errors
    ///
    /// [`ModelError::InvalidContext`] when the value, or any element of a
    /// sequence value, is neither a string nor an object.
    pub fn from_json(value: Value) -> Result<Option<Self>, ModelError> {
        match value {
            Value::Null => Ok(None),
            Value::Array(items) => items
                .into_iter()
                .map(ContextEntry::from_json)
                .collect::<Result<Vec<_>, _>>()
                .map(|entries| Some(ContextValue::Many(entries))),
            other => ContextEntry::from_json(other).map(|e| Some(ContextValue::One(e))),
        }
    }
}

/// Whether a record of the given kinds receives the default context.
#[must_use]
pub fn requires_contextualization(
    storage: StorageKind,
    abstraction: Option<AbstractionKind>,
) -> bool {
    !storage.skips_contextualization() && abstraction != Some(AbstractionKind::Reference)
}

/// Injects `default` into `current` for contextualizable records.
///
/// Excluded kinds pass `current` through unchanged, whatever it holds.
/// Otherwise: an absent context becomes the default; a sequence gets the
/// default appended unless its head or tail already is the default; a single
/// differing value becomes `[default, value]`. The head position is where
/// earlier injections under the single-value rule put the default, the tail
/// is where the sequence rule appends it — either one present means
/// injection already happened, so re-validation never grows the context.
/// A default sitting between other entries does not stop a further append;
/// such middle duplicates are preserved as-is.
#[must_use]
pub fn resolve_context(
    storage: StorageKind,
    abstraction: Option<AbstractionKind>,
    current: Option<ContextValue>,
    default: &ContextEntry,
) -> Option<ContextValue> {
    if !requires_contextualization(storage, abstraction) {
        return current;
    }
    match current {
        None => Some(ContextValue::One(default.clone())),
        Some(ContextValue::Many(mut entries)) => {
            let head_or_tail_is_default = entries.first() == Some(default)
                || entries.last() == Some(default);
            if !head_or_tail_is_default {
                entries.push(default.clone());
            }
            Some(ContextValue::Many(entries))
        }
        Some(ContextValue::One(entry)) => {
            if entry == *default {
                Some(ContextValue::One(entry))
            } else {
                Some(ContextValue::Many(vec![default.clone(), entry]))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn default_entry() -> ContextEntry {
        ContextEntry::Reference("memory://pypads_context_default/abc".to_owned())
    }

    fn other(uri: &str) -> ContextEntry {
        ContextEntry::Reference(uri.to_owned())
    }

    fn resolve(current: Option<ContextValue>) -> Option<ContextValue> {
        resolve_context(StorageKind::Parameter, None, current, &default_entry())
    }

    #[test]
    fn absent_becomes_default() {
        assert_eq!(
            resolve(None),
            Some(ContextValue::One(default_entry()))
        );
    }

    #[test]
    fn empty_sequence_gains_default() {
        assert_eq!(
            resolve(Some(ContextValue::Many(vec![]))),
            Some(ContextValue::Many(vec![default_entry()]))
        );
    }

    #[test]
    fn sequence_append_preserves_order() {
        let current = ContextValue::Many(vec![other("http://example.org/ctx1")]);
        let resolved = resolve(Some(current)).expect("resolved");
        assert_eq!(
            resolved,
            ContextValue::Many(vec![other("http://example.org/ctx1"), default_entry()])
        );
        // Re-resolving the output must not grow it.
        assert_eq!(resolve(Some(resolved.clone())), Some(resolved));
    }

    #[test]
    fn head_default_is_left_alone() {
        let current = ContextValue::Many(vec![default_entry(), other("http://example.org/ctx1")]);
        assert_eq!(resolve(Some(current.clone())), Some(current));
    }

    #[test]
    fn single_value_moves_behind_default() {
        let current = ContextValue::One(other("http://example.org/ctx1"));
        let resolved = resolve(Some(current)).expect("resolved");
        assert_eq!(
            resolved,
            ContextValue::Many(vec![default_entry(), other("http://example.org/ctx1")])
        );
        assert_eq!(resolve(Some(resolved.clone())), Some(resolved));
    }

    #[test]
    fn single_default_is_left_alone() {
        let current = ContextValue::One(default_entry());
        assert_eq!(resolve(Some(current.clone())), Some(current));
    }

    #[test]
    fn middle_default_gains_a_second_copy() {
        // A default buried mid-sequence does not count as injected; the
        // append produces a duplicate, and only then does the value settle.
        let current = ContextValue::Many(vec![
            other("http://example.org/ctx1"),
            default_entry(),
            other("http://example.org/ctx2"),
        ]);
        let resolved = resolve(Some(current)).expect("resolved");
        assert_eq!(
            resolved,
            ContextValue::Many(vec![
                other("http://example.org/ctx1"),
                default_entry(),
                other("http://example.org/ctx2"),
                default_entry(),
            ])
        );
        assert_eq!(resolve(Some(resolved.clone())), Some(resolved));
    }

    #[test]
    fn idempotent_over_assorted_inputs() {
        let inputs = [
            None,
            Some(ContextValue::Many(vec![])),
            Some(ContextValue::One(default_entry())),
            Some(ContextValue::One(other("http://example.org/ctx1"))),
            Some(ContextValue::Many(vec![other("http://example.org/ctx1")])),
            Some(ContextValue::Many(vec![
                default_entry(),
                default_entry(),
            ])),
        ];
        for input in inputs {
            let once = resolve(input);
            let twice = resolve(once.clone());
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn excluded_kinds_pass_through() {
        let current = Some(ContextValue::One(other("http://example.org/ctx1")));
        for (storage, abstraction) in [
            (StorageKind::Embedded, None),
            (StorageKind::RepositoryEntry, None),
            (StorageKind::Parameter, Some(AbstractionKind::Reference)),
        ] {
            assert_eq!(
                resolve_context(storage, abstraction, current.clone(), &default_entry()),
                current
            );
            assert_eq!(
                resolve_context(storage, abstraction, None, &default_entry()),
                None
            );
        }
    }

    #[test]
    fn full_abstraction_is_contextualized() {
        let resolved = resolve_context(
            StorageKind::Metric,
            Some(AbstractionKind::Full),
            None,
            &default_entry(),
        );
        assert_eq!(resolved, Some(ContextValue::One(default_entry())));
    }

    #[test]
    fn from_json_accepts_the_three_shapes() {
        assert_eq!(
            ContextValue::from_json(json!("http://example.org/ctx")).expect("string"),
            Some(ContextValue::One(other("http://example.org/ctx")))
        );
        let inline = ContextValue::from_json(json!({"name": "@id"})).expect("mapping");
        assert!(matches!(
            inline,
            Some(ContextValue::One(ContextEntry::Inline(_)))
        ));
        let seq = ContextValue::from_json(json!(["a", {"b": 1}])).expect("sequence");
        assert!(matches!(seq, Some(ContextValue::Many(ref v)) if v.len() == 2));
        assert_eq!(ContextValue::from_json(json!(null)).expect("null"), None);
    }

    #[test]
    fn from_json_rejects_other_shapes() {
        assert!(ContextValue::from_json(json!(42)).is_err());
        assert!(ContextValue::from_json(json!(true)).is_err());
        assert!(ContextValue::from_json(json!(["ok", 42])).is_err());
    }

    #[test]
    fn serde_forms_match_json_ld() {
        let one = ContextValue::One(other("http://example.org/ctx"));
        assert_eq!(
            serde_json::to_value(&one).expect("serialize"),
            json!("http://example.org/ctx")
        );
        let many = ContextValue::Many(vec![other("a"), default_entry()]);
        let value = serde_json::to_value(&many).expect("serialize");
        assert!(value.is_array());
        let back: ContextValue = serde_json::from_value(value).expect("deserialize");
        assert_eq!(back, many);
    }
}
