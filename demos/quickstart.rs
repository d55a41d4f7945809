//! Quickstart: index four documents and run boolean queries against them.
//!
//! Run with `cargo run --example quickstart`.

use schiltron::prelude::*;

fn main() -> Result<()> {
    let corpus = [
        "Doc1    breakthrough drug for schizophrenia",
        "Doc2    new approach for treatment of schizophrenia",
        "Doc3    new hopes for schizophrenia patients",
        "Doc4    new schizophrenia drug",
    ];

    let engine = SearchEngine::from_lines(&corpus, SearchConfig::default())?;
    println!(
        "Indexed {} documents, {} unique terms",
        engine.index().doc_count(),
        engine.index().term_count()
    );

    for query in [
        "schizophrenia AND drug",
        "breakthrough OR new",
        "(drug OR treatment) AND schizophrenia",
        "nonexistentword AND drug",
        "drug",
    ] {
        let results = engine.search(query);
        match &results.diagnostic {
            None => println!("{query:<40} => {:?}", results.hits),
            Some(diagnostic) => println!("{query:<40} => {diagnostic}"),
        }
    }

    Ok(())
}
