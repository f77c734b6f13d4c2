//! Allow-listed text file preview

use crate::{decode_bytes, FsError, Result};
use std::fs;
use std::path::Path;

/// Extensions considered safe to render as text
pub const PREVIEW_EXTENSIONS: [&str; 15] = [
    "txt", "cs", "xaml", "xml", "json", "html", "css", "js", "log", "md", "ini", "config", "bat",
    "ps1", "sh",
];

/// Check whether a path carries a previewable extension.
/// The check is case-insensitive.
pub fn is_preview_extension(path: &Path) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .map(|e| PREVIEW_EXTENSIONS.contains(&e.as_str()))
        .unwrap_or(false)
}

/// Read and decode a text file for preview.
///
/// Refuses non-allow-listed extensions without touching the file.
pub fn preview_file(path: &Path) -> Result<String> {
    if !is_preview_extension(path) {
        return Err(FsError::UnsupportedPreview(path.display().to_string()));
    }

    let bytes = fs::read(path).map_err(|e| FsError::from_read_error(path, e))?;
    let (text, had_errors) = decode_bytes(&bytes);

    if had_errors {
        tracing::warn!("Preview of {} used replacement characters", path.display());
    }

    Ok(text)
}
