//! Default JSON-LD context vocabulary for linked-data experiment tracking.
//!
//! The `padre-onto-vocab` crate encodes the term vocabulary shared by every
//! tracked record — the bindings that give short field names like `name`,
//! `created_at`, or `produced_by` their formal IRI meaning — as typed Rust
//! data, along with a serializer producing the canonical JSON-LD context
//! document.
//!
//! # Entry Point
//!
//! ```
//! let vocab = padre_onto_vocab::Vocabulary::standard();
//! assert_eq!(vocab.term_count(), 12);
//! ```
//!
//! # Serialization
//!
//! ```
//! let vocab = padre_onto_vocab::Vocabulary::standard();
//! let document = padre_onto_vocab::jsonld::to_context_document(vocab);
//! assert!(document["@context"]["is_a"].is_string());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod jsonld;
pub mod model;
pub mod terms;

pub use model::{iris, Term, TermBinding, Vocabulary};

impl Vocabulary {
    /// Builds the default vocabulary against an arbitrary ontology namespace.
    ///
    /// `namespace` must carry its trailing separator (`/`); ontology-local
    /// IRIs are formed by direct concatenation.
    #[must_use]
    pub fn for_namespace(namespace: &str) -> Vocabulary {
        Vocabulary {
            namespace: namespace.to_owned(),
            terms: terms::terms(namespace),
        }
    }

    /// Returns the vocabulary over the standard PaDRe tracking namespace.
    #[must_use]
    pub fn standard() -> &'static Vocabulary {
        static STANDARD: std::sync::OnceLock<Vocabulary> = std::sync::OnceLock::new();
        STANDARD.get_or_init(|| Vocabulary::for_namespace(iris::PADRE))
    }
}
