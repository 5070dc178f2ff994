//! Core vocabulary model types.
//!
//! A [`Vocabulary`] is the set of JSON-LD term bindings shared by every
//! record published to the knowledge base. Terms are built as owned values
//! by [`crate::terms::terms`] against a configured ontology namespace.

/// How a term name is bound in the JSON-LD `@context`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermBinding {
    /// An alias for a JSON-LD keyword (e.g. `uri` → `@id`).
    Keyword(&'static str),
    /// A bare prefix binding: the term expands to a namespace IRI
    /// (e.g. `rdfs` → `http://www.w3.org/2000/01/rdf-schema#`).
    Prefix(String),
    /// An expanded term definition carrying both `@id` and `@type`.
    Typed {
        /// The IRI the term maps to (`@id`).
        id: String,
        /// The value type: an XSD datatype IRI or an ontology class IRI (`@type`).
        datatype: String,
    },
}

/// A single vocabulary term: a short field name and its formal binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    /// The short name as it appears in serialized records (e.g. `created_at`).
    pub name: &'static str,
    /// The binding that gives the name its RDF meaning.
    pub binding: TermBinding,
    /// Description of what the term asserts about a record.
    pub comment: &'static str,
}

/// The complete term vocabulary for one ontology namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    /// Base IRI all ontology-local bindings are relative to.
    /// Must end with the separator the namespace uses (`/`).
    pub namespace: String,
    /// All term bindings, in declaration order.
    pub terms: Vec<Term>,
}

impl Vocabulary {
    /// Looks up a term by its short name. Returns `None` if not found.
    #[must_use]
    pub fn find_term(&self, name: &str) -> Option<&Term> {
        self.terms.iter().find(|t| t.name == name)
    }

    /// Returns the number of term bindings.
    #[must_use]
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }
}

/// Standard IRI constants used across the vocabulary.
pub mod iris {
    /// RDF Schema namespace.
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    /// `xsd:string`.
    pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    /// `xsd:boolean`.
    pub const XSD_BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
    /// `xsd:dateTime`.
    pub const XSD_DATETIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";

    /// Base namespace of the PaDRe tracking ontology. All derived class and
    /// instance URIs are relative to this IRI unless reconfigured.
    pub const PADRE: &str = "http://rdf.padre-lab.eu/pypads/ontology/";
}
