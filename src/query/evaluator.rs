//! Boolean query evaluation over an inverted index.
//!
//! Evaluation is a two-pass reduction over the token stream. The first pass
//! repeatedly takes the leftmost `AND`, merges its two neighbouring operands
//! and puts the result back in their place as a single composite operand. The
//! second pass does the same for `OR`. A well-formed query ends with exactly
//! one operand whose postings are the answer.
//!
//! ```text
//! drug OR treatment AND schizophrenia
//! drug OR [treatment AND schizophrenia]        AND pass
//! [drug OR treatment AND schizophrenia]        OR pass
//! ```
//!
//! Precedence is fixed. Parentheses were already discarded by the tokenizer,
//! so `(drug OR treatment) AND schizophrenia` evaluates exactly like the
//! query above.

use std::fmt;

use crate::error::{Result, SchiltronError};
use crate::index::inverted::InvertedIndex;
use crate::index::posting::PostingList;
use crate::query::config::QueryConfig;
use crate::query::token::{BooleanOperator, Token, tokenize};

/// An operand in the reduction stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// A query word, resolved against the index when an operator consumes it.
    Word(String),
    /// The result of an earlier reduction.
    Composite {
        /// The sub-expression this result was reduced from.
        expression: String,
        postings: PostingList,
    },
}

impl Operand {
    /// Query text this operand stands for.
    pub fn expression(&self) -> &str {
        match self {
            Operand::Word(word) => word,
            Operand::Composite { expression, .. } => expression,
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.expression())
    }
}

#[derive(Debug)]
enum Node {
    Operand(Operand),
    Operator(BooleanOperator),
}

impl From<Token> for Node {
    fn from(token: Token) -> Self {
        match token {
            Token::Term(word) => Node::Operand(Operand::Word(word)),
            Token::Operator(op) => Node::Operator(op),
        }
    }
}

/// Evaluates boolean queries against a borrowed index.
#[derive(Debug, Clone)]
pub struct QueryEvaluator<'a> {
    index: &'a InvertedIndex,
    config: QueryConfig,
}

impl<'a> QueryEvaluator<'a> {
    /// Create an evaluator with the default configuration.
    pub fn new(index: &'a InvertedIndex) -> Self {
        Self::with_config(index, QueryConfig::default())
    }

    pub fn with_config(index: &'a InvertedIndex, config: QueryConfig) -> Self {
        QueryEvaluator { index, config }
    }

    /// Evaluate a query and return the matching documents in ascending order.
    ///
    /// # Errors
    ///
    /// - [`SchiltronError::MalformedQuery`] if the query has too few tokens or
    ///   cannot be reduced to a single operand.
    /// - [`SchiltronError::UnknownTerm`] if an operand is not in the index.
    pub fn evaluate(&self, query: &str) -> Result<PostingList> {
        let tokens = tokenize(query);
        if tokens.len() < self.config.min_tokens {
            return Err(SchiltronError::malformed_query(format!(
                "'{}' has {} token(s), expected at least {} as <operand> <operator> <operand>",
                query.trim(),
                tokens.len(),
                self.config.min_tokens
            )));
        }

        let mut nodes: Vec<Node> = tokens.into_iter().map(Node::from).collect();
        for op in BooleanOperator::PRECEDENCE {
            self.reduce(&mut nodes, op)?;
        }

        match nodes.as_slice() {
            [Node::Operand(operand)] => Ok(self.resolve(operand)?.clone()),
            _ => Err(SchiltronError::malformed_query(format!(
                "'{}' does not reduce to a single expression; operands must be joined by AND or OR",
                query.trim()
            ))),
        }
    }

    /// Fold every occurrence of `op`, leftmost first.
    fn reduce(&self, nodes: &mut Vec<Node>, op: BooleanOperator) -> Result<()> {
        while let Some(pos) = nodes
            .iter()
            .position(|node| matches!(node, Node::Operator(o) if *o == op))
        {
            if pos == 0 || pos + 1 >= nodes.len() {
                return Err(SchiltronError::malformed_query(format!(
                    "operator {op} is missing an operand"
                )));
            }

            let reduced = match (&nodes[pos - 1], &nodes[pos + 1]) {
                (Node::Operand(left), Node::Operand(right)) => {
                    let left_postings = self.resolve(left)?;
                    let right_postings = self.resolve(right)?;
                    let postings = op.apply(left_postings, right_postings);
                    let expression = format!("{left} {op} {right}");
                    log::debug!("Reduced '{expression}' to {} document(s)", postings.len());
                    Operand::Composite {
                        expression,
                        postings,
                    }
                }
                _ => {
                    return Err(SchiltronError::malformed_query(format!(
                        "operator {op} must be placed between two operands"
                    )));
                }
            };

            nodes.drain(pos - 1..=pos + 1);
            nodes.insert(pos - 1, Node::Operand(reduced));
        }

        Ok(())
    }

    fn resolve<'s>(&'s self, operand: &'s Operand) -> Result<&'s PostingList> {
        match operand {
            Operand::Composite { postings, .. } => Ok(postings),
            Operand::Word(word) => self
                .index
                .get(word)
                .ok_or_else(|| SchiltronError::unknown_term(word.as_str())),
        }
    }
}
