//! # Schiltron
//!
//! Boolean keyword search over a small corpus of identifier-tagged documents.
//!
//! ## Features
//!
//! - Inverted index with sorted, duplicate-free posting lists
//! - Linear-time AND (intersection) and OR (union) posting merges
//! - Flat boolean queries with AND binding tighter than OR
//! - Query failures reported as diagnostics, never as panics
//!
//! ## Example
//!
//! ```
//! use schiltron::search::{SearchConfig, SearchEngine};
//!
//! let corpus = [
//!     "Doc1    breakthrough drug for schizophrenia",
//!     "Doc2    new approach for treatment of schizophrenia",
//!     "Doc3    new hopes for schizophrenia patients",
//!     "Doc4    new schizophrenia drug",
//! ];
//! let engine = SearchEngine::from_lines(&corpus, SearchConfig::default()).unwrap();
//!
//! assert_eq!(engine.search("schizophrenia AND drug").hits, vec!["Doc1", "Doc4"]);
//! assert_eq!(
//!     engine.search("(drug OR treatment) AND schizophrenia").hits,
//!     vec!["Doc1", "Doc2", "Doc4"]
//! );
//! ```

pub mod cli;
pub mod corpus;
pub mod document;
pub mod error;
pub mod index;
pub mod query;
pub mod search;

pub mod prelude {
    pub use crate::error::{Result, SchiltronError};
    pub use crate::index::{IndexBuilder, IndexConfig, InvertedIndex, PostingList};
    pub use crate::query::{QueryConfig, QueryEvaluator};
    pub use crate::search::{QueryDiagnostic, SearchConfig, SearchEngine, SearchResults};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
