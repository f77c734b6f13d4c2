//! Core error types

use thiserror::Error;

/// Errors surfaced to the presentation layer
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Clipboard is empty")]
    EmptyClipboard,

    #[error("Invalid target: {0}")]
    InvalidTarget(String),

    #[error("Preview not supported: {0}")]
    UnsupportedPreview(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CoreError {
    /// Get a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            CoreError::NotFound(path) => format!("Not found: {}", path),
            CoreError::AccessDenied(path) => format!("Access denied: {}", path),
            CoreError::EmptyClipboard => "Nothing to paste".to_string(),
            CoreError::UnsupportedPreview(path) => {
                format!("This file type cannot be previewed: {}", path)
            }
            _ => self.to_string(),
        }
    }
}

impl From<duopane_fs::FsError> for CoreError {
    fn from(e: duopane_fs::FsError) -> Self {
        match e {
            duopane_fs::FsError::NotFound(p) => CoreError::NotFound(p),
            duopane_fs::FsError::AccessDenied(p) => CoreError::AccessDenied(p),
            duopane_fs::FsError::UnsupportedPreview(p) => CoreError::UnsupportedPreview(p),
            _ => CoreError::Io(std::io::Error::other(e.to_string())),
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
