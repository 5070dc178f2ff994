//! Storage and abstraction classification for tracked records.

use serde::{Deserialize, Serialize};

/// Where a record's payload lives in the tracking backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageKind {
    /// A tracked hyperparameter value.
    Parameter,
    /// A tracked metric sample.
    Metric,
    /// A free-form tag on a run or experiment.
    Tag,
    /// A stored artifact (file, model, figure).
    Artifact,
    /// The invocation record of a logger function.
    LoggerCall,
    /// An entry of a schema/mapping repository rather than of a run.
    RepositoryEntry,
    /// A sub-record nested inside a parent's payload.
    Embedded,
}

impl StorageKind {
    /// Returns the serialized string value of this kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            StorageKind::Parameter => "parameter",
            StorageKind::Metric => "metric",
            StorageKind::Tag => "tag",
            StorageKind::Artifact => "artifact",
            StorageKind::LoggerCall => "logger_call",
            StorageKind::RepositoryEntry => "repository_entry",
            StorageKind::Embedded => "embedded",
        }
    }

    /// Whether records of this kind are excluded from context injection.
    ///
    /// Embedded records resolve their terms against the parent's context;
    /// repository entries are schema material, not published instance data.
    #[must_use]
    pub fn skips_contextualization(self) -> bool {
        matches!(self, StorageKind::Embedded | StorageKind::RepositoryEntry)
    }
}

/// Whether a record carries its full payload or stands in for another entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbstractionKind {
    /// The record is the entity itself.
    Full,
    /// The record is a stub pointing at an entity stored elsewhere; its
    /// semantics resolve at the pointed-to entity, so it is never
    /// contextualized on its own.
    Reference,
}

/// Human-readable class labels for the tracked artifact kinds. Used as
/// `category` defaults, from which class URIs are derived.
pub mod categories {
    /// Class label for tracked hyperparameters.
    pub const PARAMETER: &str = "Parameter";
    /// Class label for tracked metrics.
    pub const METRIC: &str = "Metric";
    /// Class label for tags.
    pub const TAG: &str = "Tag";
    /// Class label for stored artifacts.
    pub const ARTIFACT: &str = "Artifact";
    /// Class label for logger invocation records.
    pub const LOGGER_CALL: &str = "LoggerCall";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialized_values_are_snake_case() {
        let json = serde_json::to_string(&StorageKind::LoggerCall).expect("serialize");
        assert_eq!(json, "\"logger_call\"");
        let back: StorageKind = serde_json::from_str("\"repository_entry\"").expect("deserialize");
        assert_eq!(back, StorageKind::RepositoryEntry);
    }

    #[test]
    fn as_str_matches_serde() {
        for kind in [
            StorageKind::Parameter,
            StorageKind::Metric,
            StorageKind::Tag,
            StorageKind::Artifact,
            StorageKind::LoggerCall,
            StorageKind::RepositoryEntry,
            StorageKind::Embedded,
        ] {
            let json = serde_json::to_string(&kind).expect("serialize");
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn only_embedded_and_repository_skip() {
        assert!(StorageKind::Embedded.skips_contextualization());
        assert!(StorageKind::RepositoryEntry.skips_contextualization());
        assert!(!StorageKind::Parameter.skips_contextualization());
        assert!(!StorageKind::LoggerCall.skips_contextualization());
    }
}
