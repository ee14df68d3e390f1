use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },

    #[error("Arguments {first} and {second} cannot be used together")]
    ConflictingArguments {
        first: &'static str,
        second: &'static str,
    },

    #[error("Cannot read config {path:?}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Photosquare(#[from] photosquare::Error),
}
