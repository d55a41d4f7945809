//! Configuration for the search engine.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchiltronError};
use crate::index::config::IndexConfig;
use crate::query::config::QueryConfig;

/// Prefix prepended to document identifiers in search hits.
pub const DEFAULT_DOC_PREFIX: &str = "Doc";

/// Configuration for search operations.
///
/// Can be loaded from a JSON file; missing fields take their defaults.
///
/// ```
/// use schiltron::search::SearchConfig;
///
/// let config: SearchConfig = serde_json::from_str(r#"{ "doc_prefix": "D" }"#).unwrap();
/// assert_eq!(config.doc_prefix, "D");
/// assert_eq!(config.query.min_tokens, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Prefix used when rendering document identifiers.
    pub doc_prefix: String,

    /// Index construction settings.
    pub index: IndexConfig,

    /// Query evaluation settings.
    pub query: QueryConfig,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            doc_prefix: DEFAULT_DOC_PREFIX.to_string(),
            index: IndexConfig::default(),
            query: QueryConfig::default(),
        }
    }
}

impl SearchConfig {
    /// Load and validate a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SearchConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.doc_prefix.chars().any(char::is_whitespace) {
            return Err(SchiltronError::invalid_config(format!(
                "doc_prefix must not contain whitespace: '{}'",
                self.doc_prefix
            )));
        }
        self.query.validate()
    }
}
