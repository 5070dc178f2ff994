//! Plugin configuration: ontology namespace and SPARQL endpoint settings.
//!
//! The configuration is serialized with the dash-separated keys the host
//! framework's configuration dictionary uses, so a merged host config
//! round-trips through [`OntoConfig`] unchanged.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use padre_onto_vocab::{iris, Vocabulary};

use crate::error::ModelError;
use crate::uri;

fn default_namespace() -> String {
    iris::PADRE.to_owned()
}

/// Settings the plugin contributes to the host configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OntoConfig {
    /// Base namespace for derived class and instance URIs.
    #[serde(rename = "ontology-uri", default = "default_namespace")]
    pub ontology_uri: String,
    /// SPARQL endpoint answering read queries over published records.
    #[serde(rename = "sparql-query-endpoint")]
    pub sparql_query_endpoint: String,
    /// SPARQL endpoint accepting triple updates.
    #[serde(rename = "sparql-update-endpoint")]
    pub sparql_update_endpoint: String,
    /// User name for endpoint authentication, if the endpoint requires one.
    #[serde(
        rename = "sparql-auth-name",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub sparql_auth_name: Option<String>,
    /// Password for endpoint authentication.
    #[serde(
        rename = "sparql-auth-password",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub sparql_auth_password: Option<String>,
    /// Named graph all published triples land in.
    #[serde(rename = "sparql-graph")]
    pub sparql_graph: String,
}

impl Default for OntoConfig {
    fn default() -> Self {
        Self {
            ontology_uri: default_namespace(),
            sparql_query_endpoint: "http://rdf.padre-lab.eu/pypads/query".to_owned(),
            sparql_update_endpoint: "http://rdf.padre-lab.eu/pypads/update".to_owned(),
            sparql_auth_name: None,
            sparql_auth_password: None,
            sparql_graph: default_namespace(),
        }
    }
}

impl OntoConfig {
    /// Checks that every URI-valued setting is an absolute URI.
    ///
    /// # Errors
    ///
    /// [`ModelError::InvalidNamespace`] naming the first offending value.
    pub fn validate(&self) -> Result<(), ModelError> {
        for value in [
            &self.ontology_uri,
            &self.sparql_query_endpoint,
            &self.sparql_update_endpoint,
            &self.sparql_graph,
        ] {
            if !uri::is_absolute_uri(value) {
                return Err(ModelError::InvalidNamespace(value.clone()));
            }
        }
        Ok(())
    }

    /// Builds the term vocabulary over the configured namespace.
    #[must_use]
    pub fn vocabulary(&self) -> Vocabulary {
        Vocabulary::for_namespace(&self.ontology_uri)
    }

    /// Merges `overlay` on top of this configuration.
    ///
    /// Merging follows the host's configuration-merge semantics: objects
    /// merge key-wise and recursively, any other value in the overlay
    /// replaces the base value.
    ///
    /// # Errors
    ///
    /// [`ModelError::Config`] when the merged document no longer
    /// deserializes as a configuration.
    pub fn merged_with(&self, overlay: &Value) -> Result<OntoConfig, ModelError> {
        let base = serde_json::to_value(self).map_err(|e| ModelError::Config(e.to_string()))?;
        let merged = merge_values(base, overlay.clone());
        serde_json::from_value(merged).map_err(|e| ModelError::Config(e.to_string()))
    }
}

/// Right-biased recursive merge of JSON values.
///
/// Two objects merge key-wise, recursing per key; everything else resolves
/// to the overlay value.
#[must_use]
pub fn merge_values(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                let merged = match base_map.remove(&key) {
                    Some(base_value) => merge_values(base_value, overlay_value),
                    None => overlay_value,
                };
                base_map.insert(key, merged);
            }
            Value::Object(base_map)
        }
        (_, overlay) => overlay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_validate() {
        let config = OntoConfig::default();
        config.validate().expect("defaults must be valid");
        assert_eq!(config.ontology_uri, iris::PADRE);
        assert_eq!(config.sparql_graph, iris::PADRE);
    }

    #[test]
    fn serialized_keys_match_the_host_config() {
        let json = serde_json::to_value(OntoConfig::default()).expect("serialize");
        assert!(json.get("sparql-query-endpoint").is_some());
        assert!(json.get("ontology-uri").is_some());
        // Unauthenticated defaults omit the credential keys entirely.
        assert!(json.get("sparql-auth-name").is_none());
    }

    #[test]
    fn merge_is_right_biased_and_recursive() {
        let base = json!({"a": {"x": 1, "y": 2}, "b": "keep"});
        let overlay = json!({"a": {"y": 3, "z": 4}, "c": true});
        assert_eq!(
            merge_values(base, overlay),
            json!({"a": {"x": 1, "y": 3, "z": 4}, "b": "keep", "c": true})
        );
    }

    #[test]
    fn merged_with_overrides_single_settings() {
        let merged = OntoConfig::default()
            .merged_with(&json!({
                "sparql-update-endpoint": "http://triple.example.org/update",
                "sparql-auth-name": "tracker",
            }))
            .expect("merge");
        assert_eq!(
            merged.sparql_update_endpoint,
            "http://triple.example.org/update"
        );
        assert_eq!(merged.sparql_auth_name.as_deref(), Some("tracker"));
        // Untouched settings keep their defaults.
        assert_eq!(merged.ontology_uri, iris::PADRE);
    }

    #[test]
    fn relative_namespace_fails_validation() {
        let config = OntoConfig {
            ontology_uri: "ontology/".to_owned(),
            ..OntoConfig::default()
        };
        let err = config.validate().expect_err("must fail");
        assert!(matches!(err, ModelError::InvalidNamespace(ns) if ns == "ontology/"));
    }

    #[test]
    fn vocabulary_follows_the_configured_namespace() {
        let config = OntoConfig {
            ontology_uri: "http://example.org/onto/".to_owned(),
            ..OntoConfig::default()
        };
        let vocab = config.vocabulary();
        assert_eq!(vocab.namespace, "http://example.org/onto/");
        let term = vocab.find_term("name").expect("name term");
        match &term.binding {
            padre_onto_vocab::TermBinding::Typed { id, .. } => {
                assert_eq!(id, "http://example.org/onto/label");
            }
            other => panic!("name should be typed, got {other:?}"),
        }
    }
}
