//! High-level search engine that combines indexing and query evaluation.

use crate::error::Result;
use crate::index::builder::IndexBuilder;
use crate::index::inverted::InvertedIndex;
use crate::index::posting::{DocId, PostingList};
use crate::query::evaluator::QueryEvaluator;
use crate::search::config::SearchConfig;
use crate::search::result::{QueryDiagnostic, SearchResults};

/// A search engine over one immutable corpus.
///
/// The index is built once and reused for every query.
///
/// ```
/// use schiltron::search::{SearchConfig, SearchEngine};
///
/// let engine = SearchEngine::from_lines(
///     &["Doc1 breakthrough drug", "Doc4 new schizophrenia drug"],
///     SearchConfig::default(),
/// )
/// .unwrap();
///
/// let results = engine.search("drug AND new");
/// assert_eq!(results.hits, vec!["Doc4"]);
/// ```
#[derive(Debug, Clone)]
pub struct SearchEngine {
    /// The underlying index.
    index: InvertedIndex,
    config: SearchConfig,
}

impl SearchEngine {
    /// Create a search engine over an already built index.
    pub fn new(index: InvertedIndex, config: SearchConfig) -> Self {
        SearchEngine { index, config }
    }

    /// Validate the configuration and build an index from document lines.
    pub fn from_lines<S: AsRef<str>>(lines: &[S], config: SearchConfig) -> Result<Self> {
        config.validate()?;
        let index = IndexBuilder::new(config.index.clone()).build(lines)?;
        Ok(SearchEngine::new(index, config))
    }

    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Evaluate a query, propagating query errors.
    pub fn evaluate(&self, query: &str) -> Result<PostingList> {
        QueryEvaluator::with_config(&self.index, self.config.query.clone()).evaluate(query)
    }

    /// Run a query.
    ///
    /// Query failures do not escape: they are logged and returned as an empty
    /// result carrying a [`QueryDiagnostic`].
    pub fn search(&self, query: &str) -> SearchResults {
        match self.evaluate(query) {
            Ok(postings) => {
                let doc_ids = postings.into_vec();
                SearchResults {
                    query: query.to_string(),
                    hits: doc_ids.iter().map(|&id| self.render(id)).collect(),
                    doc_ids,
                    diagnostic: None,
                }
            }
            Err(e) => {
                log::warn!("{e}");
                // Evaluation only fails with query-level errors.
                let diagnostic =
                    QueryDiagnostic::from_error(&e).unwrap_or(QueryDiagnostic::MalformedQuery {
                        message: e.to_string(),
                    });
                SearchResults::failed(query, diagnostic)
            }
        }
    }

    /// Render a document identifier with the configured prefix.
    pub fn render(&self, doc_id: DocId) -> String {
        format!("{}{}", self.config.doc_prefix, doc_id)
    }
}

/// Build an index from `lines` and run a single query against it.
///
/// Only index construction errors (such as an empty corpus) are returned as
/// `Err`; query failures are reported inside the [`SearchResults`].
pub fn evaluate<S: AsRef<str>>(
    lines: &[S],
    query: &str,
    config: &SearchConfig,
) -> Result<SearchResults> {
    let engine = SearchEngine::from_lines(lines, config.clone())?;
    Ok(engine.search(query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SchiltronError;

    const CORPUS: [&str; 4] = [
        "Doc1    breakthrough drug for schizophrenia",
        "Doc2    new approach for treatment of schizophrenia",
        "Doc3    new hopes for schizophrenia patients",
        "Doc4    new schizophrenia drug",
    ];

    fn engine() -> SearchEngine {
        SearchEngine::from_lines(&CORPUS, SearchConfig::default()).unwrap()
    }

    #[test]
    fn test_search_renders_prefix() {
        let results = engine().search("schizophrenia AND drug");
        assert!(results.is_success());
        assert_eq!(results.hits, vec!["Doc1", "Doc4"]);
        assert_eq!(results.doc_ids, vec![1, 4]);
    }

    #[test]
    fn test_engine_reused_across_queries() {
        let engine = engine();
        assert_eq!(
            engine.search("breakthrough OR new").hits,
            vec!["Doc1", "Doc2", "Doc3", "Doc4"]
        );
        assert_eq!(
            engine.search("drug OR treatment AND schizophrenia").hits,
            vec!["Doc1", "Doc2", "Doc4"]
        );
    }

    #[test]
    fn test_failures_are_reported() {
        let engine = engine();

        let results = engine.search("nonexistentword AND drug");
        assert!(results.hits.is_empty());
        assert_eq!(
            results.diagnostic,
            Some(QueryDiagnostic::UnknownTerm {
                term: "nonexistentword".to_string()
            })
        );

        let results = engine.search("drug");
        assert!(results.hits.is_empty());
        assert!(matches!(
            results.diagnostic,
            Some(QueryDiagnostic::MalformedQuery { .. })
        ));
    }

    #[test]
    fn test_custom_prefix() {
        let config = SearchConfig {
            doc_prefix: "Article".to_string(),
            ..Default::default()
        };
        let engine = SearchEngine::from_lines(&CORPUS, config).unwrap();
        assert_eq!(engine.search("hopes OR breakthrough").hits, vec!["Article1", "Article3"]);
    }

    #[test]
    fn test_one_shot_evaluate() {
        let results = evaluate(&CORPUS, "schizophrenia AND drug", &SearchConfig::default()).unwrap();
        assert_eq!(results.hits, vec!["Doc1", "Doc4"]);

        let empty: [&str; 0] = [];
        assert!(matches!(
            evaluate(&empty, "a AND b", &SearchConfig::default()),
            Err(SchiltronError::EmptyCorpus)
        ));
    }
}
