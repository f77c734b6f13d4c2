//! Copy, move and delete operations
//!
//! Single-source, single-destination operations with overwrite semantics.
//! A failed recursive copy may leave a partial tree at the destination;
//! there is no rollback.

use crate::{FsError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Copy `src` into `dest_dir`, overwriting any existing destination.
///
/// Files are copied byte-for-byte; directories are recreated recursively.
/// Returns the destination path.
pub fn copy_entry(src: &Path, dest_dir: &Path) -> Result<PathBuf> {
    let target = destination(src, dest_dir)?;

    if src.is_dir() {
        copy_dir_recursive(src, &target)?;
    } else {
        fs::copy(src, &target)?;
    }

    tracing::info!("Copied: {} -> {}", src.display(), target.display());
    Ok(target)
}

/// Move `src` into `dest_dir`.
///
/// Tries a rename first; cross-filesystem moves fall back to copy+delete,
/// and the source is only removed after the copy completed.
pub fn move_entry(src: &Path, dest_dir: &Path) -> Result<PathBuf> {
    let target = destination(src, dest_dir)?;

    match fs::rename(src, &target) {
        Ok(()) => {
            tracing::info!("Moved: {} -> {}", src.display(), target.display());
        }
        Err(e) => {
            // Unix: EXDEV = 18, Windows: ERROR_NOT_SAME_DEVICE = 17
            let is_cross_device = match e.raw_os_error() {
                Some(18) => cfg!(unix),
                Some(17) => cfg!(windows),
                _ => false,
            };

            if !is_cross_device {
                return Err(e.into());
            }

            tracing::info!(
                "Cross-filesystem move, using copy+delete: {} -> {}",
                src.display(),
                target.display()
            );

            if src.is_dir() {
                copy_dir_recursive(src, &target)?;
                fs::remove_dir_all(src)?;
            } else {
                fs::copy(src, &target)?;
                fs::remove_file(src)?;
            }

            tracing::info!(
                "Moved (copy+delete): {} -> {}",
                src.display(),
                target.display()
            );
        }
    }

    Ok(target)
}

/// Permanently delete a file or a whole directory subtree.
///
/// No recycle bin, no undo. Deleting an already-removed path fails with
/// `NotFound`.
pub fn delete_entry(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(FsError::NotFound(path.display().to_string()));
    }

    if path.is_dir() {
        fs::remove_dir_all(path)?;
    } else {
        fs::remove_file(path)?;
    }

    tracing::warn!("Permanently deleted: {}", path.display());
    Ok(())
}

fn destination(src: &Path, dest_dir: &Path) -> Result<PathBuf> {
    if !src.exists() {
        return Err(FsError::NotFound(src.display().to_string()));
    }

    if !dest_dir.is_dir() {
        return Err(FsError::InvalidPath(format!(
            "Not a directory: {}",
            dest_dir.display()
        )));
    }

    let file_name = src
        .file_name()
        .ok_or_else(|| FsError::InvalidPath(format!("No file name: {}", src.display())))?;

    Ok(dest_dir.join(file_name))
}

/// Recursively copy a directory
fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<()> {
    if !dst.exists() {
        fs::create_dir_all(dst)?;
    }

    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(name);
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_copy_file_overwrites() {
        let dir = fixture("duopane_ops_copy");
        let dest = dir.join("dest");
        fs::create_dir(&dest).unwrap();
        let src = dir.join("f.txt");

        fs::write(&src, b"first").unwrap();
        copy_entry(&src, &dest).unwrap();
        fs::write(&src, b"second").unwrap();
        copy_entry(&src, &dest).unwrap();

        // one entry at the destination, latest content
        let listed: Vec<_> = fs::read_dir(&dest).unwrap().collect();
        assert_eq!(listed.len(), 1);
        assert_eq!(fs::read(dest.join("f.txt")).unwrap(), b"second");
        assert!(src.exists());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_copy_directory_recursive() {
        let dir = fixture("duopane_ops_copy_dir");
        let src = dir.join("tree");
        fs::create_dir_all(src.join("inner")).unwrap();
        fs::write(src.join("a.txt"), b"a").unwrap();
        fs::write(src.join("inner/b.txt"), b"b").unwrap();
        let dest = dir.join("dest");
        fs::create_dir(&dest).unwrap();

        copy_entry(&src, &dest).unwrap();

        assert_eq!(fs::read(dest.join("tree/a.txt")).unwrap(), b"a");
        assert_eq!(fs::read(dest.join("tree/inner/b.txt")).unwrap(), b"b");
        assert!(src.exists());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_move_file() {
        let dir = fixture("duopane_ops_move");
        let dest = dir.join("dest");
        fs::create_dir(&dest).unwrap();
        let src = dir.join("m.txt");
        fs::write(&src, b"payload").unwrap();

        let target = move_entry(&src, &dest).unwrap();

        assert!(!src.exists());
        assert_eq!(fs::read(&target).unwrap(), b"payload");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_delete_twice_fails_not_found() {
        let dir = fixture("duopane_ops_delete");
        let victim = dir.join("victim");
        fs::create_dir_all(victim.join("nested")).unwrap();
        fs::write(victim.join("nested/file.txt"), b"x").unwrap();

        delete_entry(&victim).unwrap();
        assert!(!victim.exists());

        let err = delete_entry(&victim).unwrap_err();
        assert!(matches!(err, FsError::NotFound(_)));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_copy_missing_source_fails() {
        let dir = fixture("duopane_ops_missing");
        let err = copy_entry(&dir.join("nope.txt"), &dir).unwrap_err();
        assert!(matches!(err, FsError::NotFound(_)));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_copy_into_file_destination_fails() {
        let dir = fixture("duopane_ops_bad_dest");
        let src = dir.join("src.txt");
        let dest = dir.join("dest.txt");
        fs::write(&src, b"x").unwrap();
        fs::write(&dest, b"y").unwrap();

        let err = copy_entry(&src, &dest).unwrap_err();
        assert!(matches!(err, FsError::InvalidPath(_)));

        let _ = fs::remove_dir_all(&dir);
    }
}
