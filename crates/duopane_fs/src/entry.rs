//! Directory entries and drive roots

use crate::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Reserved entry name meaning "navigate to parent"
pub const PARENT_SENTINEL: &str = "..";

/// One filesystem object surfaced to a panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    pub size: u64,
    pub modified: Option<i64>,
}

impl Entry {
    /// Create an entry from a path, reading its metadata
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let metadata = fs::metadata(path)?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        let is_dir = metadata.is_dir();

        Ok(Self {
            name,
            path: path.to_path_buf(),
            is_dir,
            size: if is_dir { 0 } else { metadata.len() },
            modified: modified_epoch(&metadata),
        })
    }

    /// The `".."` parent marker; has no backing filesystem object
    pub fn parent_sentinel() -> Self {
        Self {
            name: PARENT_SENTINEL.to_string(),
            path: PathBuf::new(),
            is_dir: true,
            size: 0,
            modified: None,
        }
    }

    pub fn is_parent_sentinel(&self) -> bool {
        self.name == PARENT_SENTINEL
    }

    /// Synthetic directory entry for a drive, shown at filesystem roots
    pub fn from_drive(drive: &DriveRoot) -> Self {
        let modified = fs::metadata(&drive.root)
            .ok()
            .as_ref()
            .and_then(modified_epoch);

        Self {
            name: drive.display_name(),
            path: drive.root.clone(),
            is_dir: true,
            size: 0,
            modified,
        }
    }

    /// Extension as found on disk (no leading dot), empty if none
    pub fn extension(&self) -> String {
        self.path
            .extension()
            .map(|e| e.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}

/// A mounted, ready volume
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriveRoot {
    pub name: String,
    pub label: String,
    pub root: PathBuf,
}

impl DriveRoot {
    /// `"C:\ (System)"`; the parenthetical is omitted for unlabeled volumes
    pub fn display_name(&self) -> String {
        if self.label.is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.label)
        }
    }
}

fn modified_epoch(metadata: &fs::Metadata) -> Option<i64> {
    metadata
        .modified()
        .ok()
        .and_then(|t| t.duration_since(std::time::UNIX_EPOCH).ok())
        .map(|d| d.as_secs() as i64)
}

/// Check if a file is hidden
#[cfg(windows)]
pub(crate) fn is_hidden_file(path: &Path, _name: &str) -> bool {
    use std::os::windows::fs::MetadataExt;

    const FILE_ATTRIBUTE_HIDDEN: u32 = 0x2;

    fs::metadata(path)
        .map(|m| m.file_attributes() & FILE_ATTRIBUTE_HIDDEN != 0)
        .unwrap_or(false)
}

#[cfg(not(windows))]
pub(crate) fn is_hidden_file(_path: &Path, name: &str) -> bool {
    name.starts_with('.')
}
