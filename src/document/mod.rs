//! Document line parsing.
//!
//! Turns raw corpus lines into an identifier plus content words.

pub mod parser;

// Re-export commonly used types
pub use parser::{DocumentParser, ParsedLine};
