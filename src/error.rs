//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O and JSON errors, carries the per-image failure classes
//! (load, processing, write), and provides semantic variants for argument validation.
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to load image {path:?}: {reason}")]
    Load { path: PathBuf, reason: String },

    #[error("Failed to write image {path:?}: {reason}")]
    Write { path: PathBuf, reason: String },

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Size must be greater than 0, got: {size}")]
    ZeroSize { size: usize },

    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },

    #[error("Input directory does not exist: {path:?}")]
    MissingInputDir { path: PathBuf },

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("External error: {0}")]
    External(String),
}

impl Error {
    pub fn external<E: std::fmt::Display>(e: E) -> Self {
        Error::External(e.to_string())
    }

    /// Classify this error into the per-image failure taxonomy.
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            Error::Load { .. } | Error::MissingInputDir { .. } => FailureKind::Load,
            Error::Write { .. } | Error::Io(_) => FailureKind::Write,
            _ => FailureKind::Processing,
        }
    }
}

/// Failure class recorded in a per-image outcome.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Source unreadable or not decodable as an image
    Load,
    /// A transformation stage rejected its input
    Processing,
    /// Destination not writable or encoding failed
    Write,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureKind::Load => write!(f, "load"),
            FailureKind::Processing => write!(f, "processing"),
            FailureKind::Write => write!(f, "write"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_kind_follows_error_class() {
        let load = Error::Load {
            path: PathBuf::from("a.jpg"),
            reason: "bad header".to_string(),
        };
        let write = Error::Write {
            path: PathBuf::from("out/a.jpg"),
            reason: "disk full".to_string(),
        };
        assert_eq!(load.failure_kind(), FailureKind::Load);
        assert_eq!(write.failure_kind(), FailureKind::Write);
        assert_eq!(
            Error::Processing("zero area".to_string()).failure_kind(),
            FailureKind::Processing
        );
    }
}
