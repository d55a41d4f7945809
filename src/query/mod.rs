//! Boolean query parsing and evaluation.
//!
//! Queries are flat chains of terms joined by `AND` / `OR`. `AND` binds tighter
//! than `OR`, and parentheses are ignored.

pub mod config;
pub mod evaluator;
pub mod token;

// Re-export commonly used types
pub use config::QueryConfig;
pub use evaluator::{Operand, QueryEvaluator};
pub use token::{BooleanOperator, Token, tokenize};
