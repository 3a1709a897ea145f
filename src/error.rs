//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Wraps I/O, directory-walk and glob failures, and provides semantic variants
//! for filename parsing and rename conflicts.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot traverse {}: {source}", path.display())]
    Traversal {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Invalid glob pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Cannot read glob match: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("No number found in filename: {name}")]
    NoNumber { name: String },

    #[error("Number does not fit a chapter index: {digits}")]
    InvalidNumber { digits: String },

    #[error("Destination already exists: {}", path.display())]
    DestinationExists { path: PathBuf },
}
