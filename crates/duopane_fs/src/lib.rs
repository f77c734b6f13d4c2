//! DuoPane File System Layer
//!
//! Filesystem primitives for the dual-pane manager core:
//! - Entry: directory entries with metadata, parent sentinel, drive entries
//! - Directory listing with the panel ordering policy
//! - Recursive tree aggregation grouped by extension
//! - Copy / move / delete operations
//! - Allow-listed text preview with encoding detection

mod decode;
mod entry;
mod format;
mod lister;
mod ops;
mod preview;
mod tree;

pub use decode::decode_bytes;
pub use entry::{DriveRoot, Entry, PARENT_SENTINEL};
pub use format::format_size;
pub use lister::{is_root, list_directory, list_drives, ListOptions};
pub use ops::{copy_entry, delete_entry, move_entry};
pub use preview::{is_preview_extension, preview_file, PREVIEW_EXTENSIONS};
pub use tree::{aggregate_by_extension, ExtensionGroup, NO_EXTENSION_LABEL};

use thiserror::Error;

/// File system errors
#[derive(Error, Debug)]
pub enum FsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Path not found: {0}")]
    NotFound(String),

    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Encoding error: {0}")]
    Encoding(String),

    #[error("Preview not supported: {0}")]
    UnsupportedPreview(String),
}

impl FsError {
    /// Classify an enumeration failure for a path
    pub(crate) fn from_read_error(path: &std::path::Path, e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.display().to_string()),
            std::io::ErrorKind::PermissionDenied => {
                FsError::AccessDenied(path.display().to_string())
            }
            _ => FsError::Io(e),
        }
    }
}

pub type Result<T> = std::result::Result<T, FsError>;
