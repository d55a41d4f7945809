//! Error types for the Schiltron library.
//!
//! All errors are represented by the [`SchiltronError`] enum. Two of its variants,
//! [`SchiltronError::MalformedQuery`] and [`SchiltronError::UnknownTerm`], are
//! query-level failures: the search boundary reports them alongside an empty
//! result instead of propagating them.
//!
//! # Examples
//!
//! ```
//! use schiltron::error::{SchiltronError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SchiltronError::unknown_term("nonexistentword"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

use crate::index::posting::DocId;

/// The main error type for Schiltron operations.
#[derive(Error, Debug)]
pub enum SchiltronError {
    /// I/O errors (reading corpus or configuration files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No usable document lines were supplied.
    #[error("Empty corpus: no document lines to index")]
    EmptyCorpus,

    /// Two lines carried the same document identifier under the reject policy.
    #[error("Duplicate document identifier: {0}")]
    DuplicateDocument(DocId),

    /// The query could not be reduced to a single result.
    #[error("Malformed query: {0}")]
    MalformedQuery(String),

    /// A query operand has no entry in the inverted index.
    #[error("Unknown term: '{0}' is not in the documents")]
    UnknownTerm(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for operations that may fail with SchiltronError.
pub type Result<T> = std::result::Result<T, SchiltronError>;

impl SchiltronError {
    /// Create a new malformed query error.
    pub fn malformed_query<S: Into<String>>(msg: S) -> Self {
        SchiltronError::MalformedQuery(msg.into())
    }

    /// Create a new unknown term error.
    pub fn unknown_term<S: Into<String>>(term: S) -> Self {
        SchiltronError::UnknownTerm(term.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        SchiltronError::InvalidConfig(msg.into())
    }

    /// Whether this error is a query-level failure that is reported with an
    /// empty result rather than aborting the caller.
    pub fn is_query_error(&self) -> bool {
        matches!(
            self,
            SchiltronError::MalformedQuery(_) | SchiltronError::UnknownTerm(_)
        )
    }
}
