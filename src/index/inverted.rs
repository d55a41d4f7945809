//! In-memory inverted index mapping terms to posting lists.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::index::posting::PostingList;

/// Statistics about an index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    /// Number of documents indexed.
    pub doc_count: u64,

    /// Number of unique terms in the index.
    pub term_count: u64,

    /// Sum of all posting list lengths.
    pub total_postings: u64,

    /// Lines dropped because no document identifier could be parsed.
    pub skipped_lines: u64,
}

/// Term → posting list mapping.
///
/// Terms are case-sensitive and stored exactly as they appear in the corpus.
/// Every posting list is strictly ascending. The index is immutable once built;
/// use [`IndexBuilder`](crate::index::builder::IndexBuilder) to create one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvertedIndex {
    postings: AHashMap<String, PostingList>,
    doc_ids: PostingList,
    skipped_lines: usize,
}

impl InvertedIndex {
    pub(crate) fn new(
        postings: AHashMap<String, PostingList>,
        doc_ids: PostingList,
        skipped_lines: usize,
    ) -> Self {
        InvertedIndex {
            postings,
            doc_ids,
            skipped_lines,
        }
    }

    /// Posting list for a term, if the term occurs in any document.
    pub fn get(&self, term: &str) -> Option<&PostingList> {
        self.postings.get(term)
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.postings.contains_key(term)
    }

    /// Identifiers of every indexed document, ascending.
    pub fn doc_ids(&self) -> &PostingList {
        &self.doc_ids
    }

    pub fn doc_count(&self) -> usize {
        self.doc_ids.len()
    }

    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    pub fn skipped_lines(&self) -> usize {
        self.skipped_lines
    }

    /// All terms in lexicographic order.
    pub fn terms(&self) -> Vec<&str> {
        let mut terms: Vec<&str> = self.postings.keys().map(String::as_str).collect();
        terms.sort_unstable();
        terms
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            doc_count: self.doc_count() as u64,
            term_count: self.term_count() as u64,
            total_postings: self.postings.values().map(|p| p.len() as u64).sum(),
            skipped_lines: self.skipped_lines as u64,
        }
    }
}
