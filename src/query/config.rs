//! Configuration for query evaluation.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchiltronError};

/// Smallest query that carries an operator: `operand operator operand`.
pub const MIN_QUERY_TOKENS: usize = 3;

/// Configuration for the query evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Queries with fewer tokens (after stripping parentheses) are rejected
    /// as malformed.
    pub min_tokens: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        QueryConfig {
            min_tokens: MIN_QUERY_TOKENS,
        }
    }
}

impl QueryConfig {
    pub fn validate(&self) -> Result<()> {
        if self.min_tokens < MIN_QUERY_TOKENS {
            return Err(SchiltronError::invalid_config(format!(
                "min_tokens must be at least {MIN_QUERY_TOKENS}, got {}",
                self.min_tokens
            )));
        }
        Ok(())
    }
}
