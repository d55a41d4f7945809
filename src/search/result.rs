//! Search results and reported query failures.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SchiltronError;
use crate::index::posting::DocId;

/// Why a query produced no result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QueryDiagnostic {
    /// The query could not be reduced.
    MalformedQuery { message: String },
    /// An operand does not occur in any document.
    UnknownTerm { term: String },
}

impl QueryDiagnostic {
    /// Convert a query-level error into a diagnostic. Returns `None` for
    /// errors that are not reported this way.
    pub fn from_error(error: &SchiltronError) -> Option<Self> {
        match error {
            SchiltronError::MalformedQuery(message) => Some(QueryDiagnostic::MalformedQuery {
                message: message.clone(),
            }),
            SchiltronError::UnknownTerm(term) => {
                Some(QueryDiagnostic::UnknownTerm { term: term.clone() })
            }
            _ => None,
        }
    }
}

impl fmt::Display for QueryDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryDiagnostic::MalformedQuery { message } => write!(f, "Invalid query: {message}"),
            QueryDiagnostic::UnknownTerm { term } => write!(
                f,
                "Invalid query: the word '{term}' is not in the documents, the query can't be calculated"
            ),
        }
    }
}

/// Outcome of a single query.
///
/// A failed query has empty `hits` and carries a [`QueryDiagnostic`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults {
    /// The query as given.
    pub query: String,

    /// Rendered document identifiers, ascending by identifier.
    pub hits: Vec<String>,

    /// Raw identifiers, parallel to `hits`.
    pub doc_ids: Vec<DocId>,

    /// Set when the query failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<QueryDiagnostic>,
}

impl SearchResults {
    pub fn failed<S: Into<String>>(query: S, diagnostic: QueryDiagnostic) -> Self {
        SearchResults {
            query: query.into(),
            hits: Vec::new(),
            doc_ids: Vec::new(),
            diagnostic: Some(diagnostic),
        }
    }

    pub fn is_success(&self) -> bool {
        self.diagnostic.is_none()
    }

    pub fn total_hits(&self) -> usize {
        self.hits.len()
    }
}
