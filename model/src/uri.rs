//! Class and instance URI derivation.
//!
//! A record's class URI (`is_a`) is the ontology namespace followed by the
//! percent-encoded human-readable class label; its instance URI appends the
//! record's `uid` behind a fragment separator. Both derivations are pure:
//! the same inputs always produce the same URIs, with no I/O involved.

use crate::error::ModelError;

/// Percent-encodes `raw` for use as a URI path or fragment component.
///
/// Every byte outside the RFC 3986 unreserved set (`A–Z`, `a–z`, `0–9`,
/// `-`, `_`, `.`, `~`) is escaped — including `/`, `#`, `?`, and spaces.
/// This single escape set is applied everywhere a label enters a URI, so
/// the derived identifiers are stable for any external triple store.
#[must_use]
pub fn encode_component(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}

/// Whether `value` is an absolute URI: an RFC 3986 scheme followed by `:`
/// and a non-empty remainder.
#[must_use]
pub fn is_absolute_uri(value: &str) -> bool {
    let Some((scheme, rest)) = value.split_once(':') else {
        return false;
    };
    if rest.is_empty() {
        return false;
    }
    let mut chars = scheme.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Derives the class URI for a record from its human-readable labels.
///
/// `category` wins over `name`; the winning label is percent-encoded and
/// appended to `namespace`.
///
/// # Errors
///
/// [`ModelError::InvalidNamespace`] if `namespace` is not an absolute URI;
/// [`ModelError::MissingIdentity`] if both labels are absent — there is no
/// safe default class URI.
pub fn derive_is_a(
    category: Option<&str>,
    name: Option<&str>,
    namespace: &str,
) -> Result<String, ModelError> {
    if !is_absolute_uri(namespace) {
        return Err(ModelError::InvalidNamespace(namespace.to_owned()));
    }
    let label = category.or(name).ok_or(ModelError::MissingIdentity)?;
    Ok(format!("{namespace}{}", encode_component(label)))
}

/// Composes the instance URI: `is_a` + `#` + `uid`.
#[must_use]
pub fn derive_uri(is_a: &str, uid: &str) -> String {
    format!("{is_a}#{uid}")
}
