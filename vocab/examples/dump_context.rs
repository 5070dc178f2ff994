//! Demonstrates rendering the default context vocabulary.
//!
//! Run with: `cargo run --example dump_context -p padre-onto-vocab`

fn main() {
    let vocab = padre_onto_vocab::Vocabulary::standard();

    println!("Tracking vocabulary @ {}", vocab.namespace);
    println!("  Terms: {}", vocab.term_count());
    println!();

    for term in &vocab.terms {
        let binding = match &term.binding {
            padre_onto_vocab::TermBinding::Keyword(kw) => (*kw).to_owned(),
            padre_onto_vocab::TermBinding::Prefix(iri) => iri.clone(),
            padre_onto_vocab::TermBinding::Typed { id, datatype } => {
                format!("{id} ({datatype})")
            }
        };
        println!("  {:12} {}", term.name, binding);
    }

    println!();
    let document = padre_onto_vocab::jsonld::to_context_document(vocab);
    let pretty =
        serde_json::to_string_pretty(&document).unwrap_or_else(|e| format!("JSON error: {e}"));
    println!("Context document ({} bytes):", pretty.len());
    println!("{pretty}");
}
