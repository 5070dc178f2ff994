//! The default context vocabulary as data.
//!
//! Every binding here is a compatibility surface: consumers that interpret
//! tracked records as RDF depend on these exact term names, property IRIs,
//! and datatype IRIs. Renaming a term is a breaking change for any triple
//! store already populated from tracked runs.

use crate::model::iris::{RDFS, XSD_BOOLEAN, XSD_DATETIME, XSD_STRING};
use crate::model::{Term, TermBinding};

/// Returns the default term bindings against `namespace`.
///
/// Ontology-local IRIs (`contained_in`, `label`, `relates_to`, …) are formed
/// by direct concatenation, so `namespace` must carry its trailing separator.
#[must_use]
pub fn terms(namespace: &str) -> Vec<Term> {
    vec![
        Term {
            name: "rdfs",
            binding: TermBinding::Prefix(RDFS.to_owned()),
            comment: "RDF Schema prefix, available to inline annotations.",
        },
        Term {
            name: "padre",
            binding: TermBinding::Prefix(namespace.to_owned()),
            comment: "Prefix for the tracking ontology itself.",
        },
        Term {
            name: "uri",
            binding: TermBinding::Keyword("@id"),
            comment: "The record's instance URI is its RDF subject.",
        },
        Term {
            name: "is_a",
            binding: TermBinding::Keyword("@type"),
            comment: "The record's class URI is its RDF type.",
        },
        Term {
            name: "experiment",
            binding: TermBinding::Typed {
                id: format!("{namespace}contained_in"),
                datatype: format!("{namespace}Experiment"),
            },
            comment: "Containment of a record in its experiment.",
        },
        Term {
            name: "run",
            binding: TermBinding::Typed {
                id: format!("{namespace}contained_in"),
                datatype: format!("{namespace}Run"),
            },
            comment: "Containment of a record in its run.",
        },
        Term {
            name: "created_at",
            binding: TermBinding::Typed {
                id: format!("{namespace}created_at"),
                datatype: XSD_DATETIME.to_owned(),
            },
            comment: "Creation timestamp of the record.",
        },
        Term {
            name: "name",
            binding: TermBinding::Typed {
                id: format!("{namespace}label"),
                datatype: XSD_STRING.to_owned(),
            },
            comment: "Human-readable instance label.",
        },
        Term {
            name: "in_context",
            binding: TermBinding::Typed {
                id: format!("{namespace}relates_to"),
                datatype: format!("{namespace}Context"),
            },
            comment: "Relation of a record to the call context it was produced in.",
        },
        Term {
            name: "reference",
            binding: TermBinding::Typed {
                id: format!("{namespace}represents"),
                datatype: XSD_STRING.to_owned(),
            },
            comment: "Opaque pointer from a reference stub to the entity it stands for.",
        },
        Term {
            name: "produced_by",
            binding: TermBinding::Typed {
                id: format!("{namespace}produced_by"),
                datatype: format!("{namespace}LoggerCall"),
            },
            comment: "Provenance: the logger invocation that emitted the record.",
        },
        Term {
            name: "failed",
            binding: TermBinding::Typed {
                id: format!("{namespace}failure"),
                datatype: XSD_BOOLEAN.to_owned(),
            },
            comment: "Whether the producing call failed.",
        },
    ]
}
