//! Crate-level error type and `Result` alias.
//! Each stage of a transform (scratch file allocation, input copy, tool launch,
//! tool exit, output read) has its own variant so callers can tell them apart.
use std::process::ExitStatus;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to create scratch file: {0}")]
    TempFile(#[source] std::io::Error),

    #[error("failed to copy input image: {0}")]
    InputCopy(#[source] std::io::Error),

    #[error("failed to launch `{program}`: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`primitive` exited with {status}: {diagnostics}")]
    ToolFailed {
        status: ExitStatus,
        diagnostics: String,
    },

    #[error("failed to read rendered image: {0}")]
    OutputRead(#[source] std::io::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Shape count must be greater than 0, got: {count}")]
    InvalidShapeCount { count: u32 },

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    /// Failure reported by a custom `ShapeRenderer`.
    #[error("External error: {0}")]
    External(String),
}

impl Error {
    pub fn external<E: std::fmt::Display>(e: E) -> Self {
        Error::External(e.to_string())
    }

    /// Text captured from the tool, if this error carries any.
    pub fn diagnostics(&self) -> Option<&str> {
        match self {
            Error::ToolFailed { diagnostics, .. } => Some(diagnostics),
            _ => None,
        }
    }
}
