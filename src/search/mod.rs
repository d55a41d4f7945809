//! Search engine for executing queries and rendering results.

pub mod config;
pub mod engine;
pub mod result;

pub use self::config::{DEFAULT_DOC_PREFIX, SearchConfig};
pub use self::engine::{SearchEngine, evaluate};
pub use self::result::{QueryDiagnostic, SearchResults};
