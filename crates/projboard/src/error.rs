use std::path::PathBuf;

use projboard_runtime::ItemId;
use thiserror::Error;

use crate::validation::ValidationError;

pub type Result<T> = std::result::Result<T, BoardError>;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("no project with id {id}")]
    UnknownProject { id: ItemId },

    #[error("invalid command: {message}")]
    InvalidCommand { message: String },

    #[error("seed entry {index} is invalid: {source}")]
    InvalidSeed {
        index: usize,
        #[source]
        source: ValidationError,
    },

    #[error("seed file not found: {path}")]
    MissingSeed { path: PathBuf },

    #[error("logging setup failed: {message}")]
    Logging { message: String },
}

impl BoardError {
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidCommand { .. } | Self::Validation(_) | Self::InvalidSeed { .. } => 2,
            Self::MissingSeed { .. } => 3,
            _ => 1,
        }
    }

    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidCommand {
            message: message.into(),
        }
    }
}
