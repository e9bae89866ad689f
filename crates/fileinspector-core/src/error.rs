//! Error types for `fileinspector-core`.
//!
//! Only conditions the caller must act on are errors. Files that vanish or
//! cannot be read during a scan, and files that cannot be deleted during a
//! cleanup, are recovered locally and reported as data instead.

use std::path::PathBuf;

/// Unified error type for the fallible core operations.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The scan root does not exist.
    #[error("path not found: {0}")]
    RootNotFound(PathBuf),

    /// The scan root exists but is not a directory.
    #[error("not a directory: {0}")]
    RootNotADirectory(PathBuf),

    /// Writing a CSV export failed.
    #[error("csv export failed: {0}")]
    Csv(#[from] csv::Error),

    /// Writing a JSON export failed.
    #[error("json export failed: {0}")]
    Json(#[from] serde_json::Error),

    /// An I/O error that doesn't fit a more specific variant.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// `true` for the precondition failures raised before a scan starts.
    pub fn is_invalid_root(&self) -> bool {
        matches!(self, Self::RootNotFound(_) | Self::RootNotADirectory(_))
    }
}

/// Convenience alias used throughout `fileinspector-core`.
pub type CoreResult<T> = Result<T, CoreError>;
