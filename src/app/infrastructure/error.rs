use std::path::PathBuf;

use thiserror::Error;

/// Every failure in the editor core. None of them is fatal: callers keep the
/// previous good state and at most put a message on the status line.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage error at {}: {source}", .path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Document error at {}: {source}", .path.display())]
    DocumentIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Platform capability unavailable: {0}")]
    PlatformUnavailable(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl AppError {
    pub fn storage(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Storage {
            path: path.into(),
            source,
        }
    }

    pub fn document(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DocumentIo {
            path: path.into(),
            source,
        }
    }
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;
