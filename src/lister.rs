/*!
 * Directory listing
 */

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{GutError, Result};
use crate::types::DirectoryEntry;

/// Fail unless `dir` exists and is a directory
pub fn ensure_directory(dir: &Path) -> Result<()> {
    let metadata = fs::metadata(dir).map_err(|e| GutError::path(dir, e))?;
    if !metadata.is_dir() {
        return Err(GutError::NotADirectory(dir.to_path_buf()));
    }
    Ok(())
}

/// Read the immediate children of `dir`
///
/// Every child is stat'ed without following links. Any failure, on the
/// directory itself or on one of its children, aborts the whole listing.
pub fn list_directory(dir: &Path) -> Result<Vec<DirectoryEntry>> {
    ensure_directory(dir)?;

    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| GutError::path(dir, e))? {
        let entry = entry.map_err(|e| GutError::path(dir, e))?;
        let path = entry.path();
        let metadata = fs::symlink_metadata(&path).map_err(|e| GutError::path(&path, e))?;
        let name = entry.file_name().to_string_lossy().to_string();

        entries.push(DirectoryEntry::from_metadata(name, &metadata));
    }

    debug!(dir = %dir.display(), count = entries.len(), "listed directory");
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EntryKind;
    use std::fs::File;
    use std::io::Write;
    use std::os::unix::fs::PermissionsExt;

    #[test]
    fn test_lists_immediate_children_only() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::create_dir(temp_dir.path().join("sub")).unwrap();
        fs::write(temp_dir.path().join("sub").join("nested.txt"), "n").unwrap();
        let mut file = File::create(temp_dir.path().join("top.txt")).unwrap();
        write!(file, "hello").unwrap();
        fs::write(temp_dir.path().join(".hidden"), "").unwrap();

        let mut entries = list_directory(temp_dir.path()).unwrap();
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec![".hidden", "sub", "top.txt"]);
        assert_eq!(entries[1].kind, EntryKind::Directory);
        assert_eq!(entries[2].kind, EntryKind::File);
        assert_eq!(entries[2].size, 5);
    }

    #[test]
    fn test_symlink_to_directory_is_not_a_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::create_dir(temp_dir.path().join("real")).unwrap();
        std::os::unix::fs::symlink("real", temp_dir.path().join("alias")).unwrap();

        let entries = list_directory(temp_dir.path()).unwrap();
        let alias = entries.iter().find(|e| e.name == "alias").unwrap();
        assert!(alias.is_symlink());
        assert!(!alias.is_dir());
    }

    #[test]
    fn test_missing_directory_is_path_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let err = list_directory(&temp_dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, GutError::Path { .. }));
    }

    #[test]
    fn test_file_is_not_a_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let file = temp_dir.path().join("plain");
        fs::write(&file, "").unwrap();

        let err = list_directory(&file).unwrap_err();
        assert!(matches!(err, GutError::NotADirectory(_)));
        assert!(err.is_path_error());
    }

    #[test]
    fn test_unreadable_directory_is_path_error() {
        // root ignores permission bits
        if users::get_current_uid() == 0 {
            return;
        }

        let temp_dir = tempfile::tempdir().unwrap();
        let locked = temp_dir.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::write(locked.join("secret"), "s").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        let result = list_directory(&locked);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        let err = result.unwrap_err();
        assert!(matches!(err, GutError::Path { .. }), "{:?}", err);
        assert!(err.is_path_error());
    }
}
