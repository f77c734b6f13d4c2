//! Recursive tree aggregation grouped by extension

use crate::{Entry, FsError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Group label for files without an extension
pub const NO_EXTENSION_LABEL: &str = "no extension";

/// Aggregation result for one extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionGroup {
    pub extension: String,
    pub file_count: usize,
    pub total_size: u64,
    pub members: Vec<Entry>,
}

/// Walk the subtree under `root` and group every regular file by extension.
///
/// Extensions are compared case-sensitively, as found on disk. Groups come
/// back ordered by descending file count, ties broken by extension
/// ascending; each group's members are sorted ascending by name.
///
/// Subdirectories that cannot be entered are skipped; only a failure to
/// read `root` itself is an error.
pub fn aggregate_by_extension<P: AsRef<Path>>(root: P) -> Result<Vec<ExtensionGroup>> {
    let root = root.as_ref();

    if !root.exists() {
        return Err(FsError::NotFound(root.display().to_string()));
    }

    let mut files = Vec::new();
    collect_files(root, &mut files)?;

    let mut by_extension: BTreeMap<String, Vec<Entry>> = BTreeMap::new();
    for file in files {
        let extension = file.extension();
        let key = if extension.is_empty() {
            NO_EXTENSION_LABEL.to_string()
        } else {
            extension
        };
        by_extension.entry(key).or_default().push(file);
    }

    let mut groups: Vec<ExtensionGroup> = by_extension
        .into_iter()
        .map(|(extension, mut members)| {
            members.sort_by(|a, b| a.name.cmp(&b.name));
            ExtensionGroup {
                extension,
                file_count: members.len(),
                total_size: members.iter().map(|m| m.size).sum(),
                members,
            }
        })
        .collect();

    // BTreeMap iteration already yields extensions ascending; the stable
    // sort keeps that order within equal counts
    groups.sort_by(|a, b| b.file_count.cmp(&a.file_count));

    tracing::debug!(
        "Aggregated {} extension groups under {}",
        groups.len(),
        root.display()
    );
    Ok(groups)
}

fn collect_files(dir: &Path, files: &mut Vec<Entry>) -> Result<()> {
    let read = fs::read_dir(dir).map_err(|e| FsError::from_read_error(dir, e))?;

    for entry in read {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::debug!("Skipping unreadable entry in {}: {}", dir.display(), e);
                continue;
            }
        };

        let path = entry.path();
        if path.is_dir() {
            if let Err(e) = collect_files(&path, files) {
                tracing::debug!("Skipping inaccessible subtree {}: {}", path.display(), e);
            }
        } else {
            match Entry::from_path(&path) {
                Ok(file_entry) => files.push(file_entry),
                Err(e) => {
                    tracing::debug!("Skipping file {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(())
}
