//! Builds an [`InvertedIndex`] from raw document lines.
//!
//! Construction runs in two phases. First every line is parsed and keyed by
//! its document identifier, which is where duplicate identifiers are resolved.
//! Then each retained document's words are appended to their posting lists,
//! and finally every list is sorted.

use ahash::AHashMap;

use crate::document::parser::{DocumentParser, ParsedLine};
use crate::error::{Result, SchiltronError};
use crate::index::config::{DuplicatePolicy, IndexConfig};
use crate::index::inverted::InvertedIndex;
use crate::index::posting::{DocId, PostingList};

/// Builder for in-memory inverted indexes.
#[derive(Debug, Clone, Default)]
pub struct IndexBuilder {
    config: IndexConfig,
}

impl IndexBuilder {
    /// Create a new builder with the given configuration.
    pub fn new(config: IndexConfig) -> Self {
        IndexBuilder { config }
    }

    /// Build an index from trimmed, non-blank document lines.
    ///
    /// Lines without a document identifier are skipped. Fails with
    /// [`SchiltronError::EmptyCorpus`] when `lines` is empty.
    pub fn build<S: AsRef<str>>(&self, lines: &[S]) -> Result<InvertedIndex> {
        if lines.is_empty() {
            return Err(SchiltronError::EmptyCorpus);
        }

        let mut documents: AHashMap<DocId, ParsedLine<'_>> = AHashMap::new();
        let mut skipped_lines = 0;

        for line in lines {
            let line = line.as_ref();
            let Some(parsed) = DocumentParser::parse(line) else {
                log::debug!("Skipping line without document identifier: '{line}'");
                skipped_lines += 1;
                continue;
            };

            let doc_id = parsed.doc_id;
            if documents.insert(doc_id, parsed).is_some() {
                match self.config.duplicate_policy {
                    DuplicatePolicy::LastWriteWins => {
                        log::debug!("Document {doc_id} redefined, keeping the later line");
                    }
                    DuplicatePolicy::Reject => {
                        return Err(SchiltronError::DuplicateDocument(doc_id));
                    }
                }
            }
        }

        let mut postings: AHashMap<String, Vec<DocId>> = AHashMap::new();
        for (&doc_id, parsed) in &documents {
            for &word in &parsed.words {
                let list = postings.entry(word.to_string()).or_default();
                // A document's words are visited together, so a repeat can only
                // be the last entry.
                if list.last() != Some(&doc_id) {
                    list.push(doc_id);
                }
            }
        }

        let postings: AHashMap<String, PostingList> = postings
            .into_iter()
            .map(|(term, mut doc_ids)| {
                doc_ids.sort_unstable();
                (term, PostingList::from_sorted(doc_ids))
            })
            .collect();
        let doc_ids = PostingList::from_unsorted(documents.keys().copied().collect());

        log::info!(
            "Built index: {} documents, {} terms, {} lines skipped",
            doc_ids.len(),
            postings.len(),
            skipped_lines
        );

        Ok(InvertedIndex::new(postings, doc_ids, skipped_lines))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORPUS: [&str; 4] = [
        "Doc1    breakthrough drug for schizophrenia",
        "Doc2    new approach for treatment of schizophrenia",
        "Doc3    new hopes for schizophrenia patients",
        "Doc4    new schizophrenia drug",
    ];

    #[test]
    fn test_build_postings() {
        let index = IndexBuilder::default().build(&CORPUS).unwrap();

        assert_eq!(index.doc_count(), 4);
        assert_eq!(index.get("schizophrenia").unwrap().as_slice(), &[1, 2, 3, 4]);
        assert_eq!(index.get("drug").unwrap().as_slice(), &[1, 4]);
        assert_eq!(index.get("new").unwrap().as_slice(), &[2, 3, 4]);
        assert_eq!(index.get("treatment").unwrap().as_slice(), &[2]);
        // identifier tokens are not indexed as words
        assert!(index.get("Doc1").is_none());
    }

    #[test]
    fn test_empty_corpus() {
        let lines: [&str; 0] = [];
        let result = IndexBuilder::default().build(&lines);
        assert!(matches!(result, Err(SchiltronError::EmptyCorpus)));
    }

    #[test]
    fn test_repeated_word_in_document_is_posted_once() {
        let index = IndexBuilder::default()
            .build(&["Doc9 drug drug drug", "Doc2 drug"])
            .unwrap();
        assert_eq!(index.get("drug").unwrap().as_slice(), &[2, 9]);
    }

    #[test]
    fn test_lines_without_identifier_are_skipped() {
        let index = IndexBuilder::default()
            .build(&[
                "Doc1 breakthrough drug",
                "Doc    breakthrough for schizophrenia",
                "Doc4 new drug",
            ])
            .unwrap();

        assert_eq!(index.doc_count(), 2);
        assert_eq!(index.skipped_lines(), 1);
        assert_eq!(index.get("breakthrough").unwrap().as_slice(), &[1]);
        assert!(index.get("schizophrenia").is_none());
        assert_eq!(index.get("drug").unwrap().as_slice(), &[1, 4]);
    }

    #[test]
    fn test_duplicate_identifier_last_write_wins() {
        let index = IndexBuilder::default()
            .build(&["Doc1 old words", "Doc2 other", "Doc1 new words"])
            .unwrap();

        assert_eq!(index.doc_count(), 2);
        assert!(index.get("old").is_none());
        assert_eq!(index.get("new").unwrap().as_slice(), &[1]);
        assert_eq!(index.get("words").unwrap().as_slice(), &[1]);
    }

    #[test]
    fn test_duplicate_identifier_rejected() {
        let builder = IndexBuilder::new(IndexConfig {
            duplicate_policy: DuplicatePolicy::Reject,
        });
        let result = builder.build(&["Doc1 old words", "Doc1 new words"]);
        assert!(matches!(result, Err(SchiltronError::DuplicateDocument(1))));
    }

    #[test]
    fn test_build_is_deterministic() {
        let builder = IndexBuilder::default();
        let first = builder.build(&CORPUS).unwrap();
        let second = builder.build(&CORPUS).unwrap();

        assert_eq!(first, second);
        for term in first.terms() {
            assert_eq!(first.get(term), second.get(term));
        }
    }

    #[test]
    fn test_postings_are_sorted_regardless_of_line_order() {
        let index = IndexBuilder::default()
            .build(&["Doc30 drug", "Doc4 drug", "Doc12 drug"])
            .unwrap();
        assert_eq!(index.get("drug").unwrap().as_slice(), &[4, 12, 30]);
    }
}
