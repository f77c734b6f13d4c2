//! Directory listing with the panel ordering policy

use crate::entry::is_hidden_file;
use crate::{DriveRoot, Entry, FsError, Result};
use std::fs;
use std::path::Path;

/// Options for listing directory contents
#[derive(Debug, Clone)]
pub struct ListOptions {
    pub show_hidden: bool,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self { show_hidden: false }
    }
}

/// List directory contents in panel order:
/// parent sentinel (non-root), drive entries (root), subdirectories, files.
///
/// The four groups are concatenated literally; within a group the entries
/// keep OS enumeration order. Entries whose metadata cannot be read are
/// skipped without aborting the listing.
pub fn list_directory<P: AsRef<Path>>(path: P, options: &ListOptions) -> Result<Vec<Entry>> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(FsError::NotFound(path.display().to_string()));
    }

    if !path.is_dir() {
        return Err(FsError::InvalidPath(format!(
            "Not a directory: {}",
            path.display()
        )));
    }

    let mut entries = Vec::new();

    if is_root(path) {
        for drive in list_drives() {
            entries.push(Entry::from_drive(&drive));
        }
    } else {
        entries.push(Entry::parent_sentinel());
    }

    let mut dirs = Vec::new();
    let mut files = Vec::new();

    let read = fs::read_dir(path).map_err(|e| FsError::from_read_error(path, e))?;
    for entry in read {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::debug!("Skipping unreadable entry in {}: {}", path.display(), e);
                continue;
            }
        };

        let file_entry = match Entry::from_path(entry.path()) {
            Ok(e) => e,
            Err(e) => {
                tracing::debug!("Skipping entry {:?}: {}", entry.path(), e);
                continue;
            }
        };

        if !options.show_hidden && is_hidden_file(&file_entry.path, &file_entry.name) {
            continue;
        }

        if file_entry.is_dir {
            dirs.push(file_entry);
        } else {
            files.push(file_entry);
        }
    }

    entries.append(&mut dirs);
    entries.append(&mut files);

    tracing::debug!("Listed {} entries in {}", entries.len(), path.display());
    Ok(entries)
}

/// Check if path is a root/drive
pub fn is_root<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();

    #[cfg(windows)]
    {
        // Windows: C:\ is root
        let s = path.to_string_lossy();
        s.len() <= 3 && s.ends_with('\\')
    }

    #[cfg(not(windows))]
    {
        path.parent().is_none()
    }
}

/// Enumerate ready drives, sorted ascending by name; never cached
#[cfg(windows)]
pub fn list_drives() -> Vec<DriveRoot> {
    let mut drives = Vec::new();

    for letter in b'A'..=b'Z' {
        let name = format!("{}:\\", letter as char);
        let path = Path::new(&name);
        if path.exists() {
            drives.push(DriveRoot {
                label: volume_label(&name),
                root: path.to_path_buf(),
                name,
            });
        }
    }

    // Probe order is already A-Z
    drives
}

#[cfg(not(windows))]
pub fn list_drives() -> Vec<DriveRoot> {
    vec![DriveRoot {
        name: "/".to_string(),
        label: String::new(),
        root: std::path::PathBuf::from("/"),
    }]
}

#[cfg(windows)]
fn volume_label(root: &str) -> String {
    use windows::core::{HSTRING, PCWSTR};
    use windows::Win32::Storage::FileSystem::GetVolumeInformationW;

    let root_w = HSTRING::from(root);
    let mut name_buf = [0u16; 261];

    let ok = unsafe {
        GetVolumeInformationW(
            PCWSTR(root_w.as_ptr()),
            Some(&mut name_buf),
            None,
            None,
            None,
            None,
        )
    };

    if ok.is_err() {
        return String::new();
    }

    let len = name_buf
        .iter()
        .position(|&c| c == 0)
        .unwrap_or(name_buf.len());
    String::from_utf16_lossy(&name_buf[..len])
}
