//! Index module for Schiltron.
//!
//! This module provides inverted index construction from document lines and
//! the sorted posting-list merges used to answer boolean queries.

pub mod builder;
pub mod config;
pub mod inverted;
pub mod merge;
pub mod posting;

// Re-export commonly used types
pub use builder::IndexBuilder;
pub use config::{DuplicatePolicy, IndexConfig};
pub use inverted::{IndexStats, InvertedIndex};
pub use posting::{DocId, PostingList};
