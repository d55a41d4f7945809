//! Query tokenization.
//!
//! Parentheses are removed before splitting, so `(drug OR treatment)` and
//! `drug OR treatment` produce the same tokens. Operators are the literal
//! uppercase words `AND` and `OR`; anything else is a term.

use std::fmt;

use crate::index::posting::PostingList;

/// Boolean operators understood by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BooleanOperator {
    /// Intersection of both operands.
    And,
    /// Union of both operands.
    Or,
}

impl BooleanOperator {
    /// Operators in reduction order: every AND is resolved before any OR.
    pub const PRECEDENCE: [BooleanOperator; 2] = [BooleanOperator::And, BooleanOperator::Or];

    pub fn as_str(&self) -> &'static str {
        match self {
            BooleanOperator::And => "AND",
            BooleanOperator::Or => "OR",
        }
    }

    /// Recognize an operator token. Matching is case-sensitive.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "AND" => Some(BooleanOperator::And),
            "OR" => Some(BooleanOperator::Or),
            _ => None,
        }
    }

    /// Merge two posting lists with this operator.
    pub fn apply(&self, left: &PostingList, right: &PostingList) -> PostingList {
        match self {
            BooleanOperator::And => left.intersect(right),
            BooleanOperator::Or => left.union(right),
        }
    }
}

impl fmt::Display for BooleanOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single query token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A word to look up in the index.
    Term(String),
    /// `AND` or `OR`.
    Operator(BooleanOperator),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Term(term) => f.write_str(term),
            Token::Operator(op) => op.fmt(f),
        }
    }
}

/// Strip parentheses and split a query into typed tokens.
pub fn tokenize(query: &str) -> Vec<Token> {
    let stripped: String = query.chars().filter(|c| !matches!(c, '(' | ')')).collect();

    stripped
        .split_whitespace()
        .map(|word| match BooleanOperator::from_token(word) {
            Some(op) => Token::Operator(op),
            None => Token::Term(word.to_string()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term(s: &str) -> Token {
        Token::Term(s.to_string())
    }

    #[test]
    fn test_tokenize_simple() {
        assert_eq!(
            tokenize("schizophrenia AND drug"),
            vec![
                term("schizophrenia"),
                Token::Operator(BooleanOperator::And),
                term("drug")
            ]
        );
    }

    #[test]
    fn test_tokenize_strips_parentheses() {
        assert_eq!(
            tokenize("(drug OR treatment) AND schizophrenia"),
            tokenize("drug OR treatment AND schizophrenia")
        );
        assert_eq!(tokenize("( drug )"), vec![term("drug")]);
    }

    #[test]
    fn test_tokenize_collapses_whitespace() {
        assert_eq!(tokenize("  new \t OR\n drug  ").len(), 3);
    }

    #[test]
    fn test_operators_are_case_sensitive() {
        assert_eq!(
            tokenize("drug and new"),
            vec![term("drug"), term("and"), term("new")]
        );
    }

    #[test]
    fn test_operator_display() {
        assert_eq!(BooleanOperator::And.to_string(), "AND");
        assert_eq!(Token::Operator(BooleanOperator::Or).to_string(), "OR");
    }
}
