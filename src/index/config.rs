//! Configuration for index construction.

use serde::{Deserialize, Serialize};

/// How the builder treats two lines that carry the same document identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// The later line replaces the earlier line's content.
    #[default]
    LastWriteWins,
    /// Fail index construction with `DuplicateDocument`.
    Reject,
}

/// Configuration for building an inverted index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Handling of repeated document identifiers.
    pub duplicate_policy: DuplicatePolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keeps_last_line() {
        assert_eq!(
            IndexConfig::default().duplicate_policy,
            DuplicatePolicy::LastWriteWins
        );
    }

    #[test]
    fn test_deserialize_policy() {
        let config: IndexConfig =
            serde_json::from_str(r#"{ "duplicate_policy": "reject" }"#).unwrap();
        assert_eq!(config.duplicate_policy, DuplicatePolicy::Reject);

        let config: IndexConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, IndexConfig::default());
    }
}
