use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: io::Error,
    },
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Invalid pattern '{pattern}': {message}")]
    Pattern { pattern: String, message: String },
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
impl WalkError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        WalkError::Io {
            path: path.into(),
            source,
        }
    }
    pub(crate) fn config(message: impl Into<String>) -> Self {
        WalkError::Config(message.into())
    }
    pub(crate) fn pattern(pattern: impl Into<String>, message: impl ToString) -> Self {
        WalkError::Pattern {
            pattern: pattern.into(),
            message: message.to_string(),
        }
    }
    /// The directory an I/O failure was reported for, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            WalkError::Io { path, .. } => Some(path),
            _ => None,
        }
    }
    /// The underlying OS error, if any.
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            WalkError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
    pub fn is_config(&self) -> bool {
        matches!(self, WalkError::Config(_))
    }
}
