use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid extension: '{extension}'. Must be non-empty and contain no path separators")]
    InvalidExtension { extension: String },

    #[error("{failed} of {examined} file(s) could not be renamed")]
    FailedRenames { failed: usize, examined: usize },

    #[error("Cannot render report: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Rename(#[from] surah_rename::Error),
}
