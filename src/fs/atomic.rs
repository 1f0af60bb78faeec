//! Atomic, owner-only file writes and directory removal.
//!
//! Writes go to a temporary file in the same directory, are synced, and then
//! renamed over the target. On Unix the temporary file is created with mode
//! `0600`, so the secret is never readable by other users, not even briefly.
//!
//! On crash a temporary file named `.{filename}.tmp` may remain next to the
//! target.

use crate::error::{Result, SessionError};
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Atomically write `content` to `path`, readable and writable by the owner only.
///
/// # Returns
///
/// * `Ok(())` - On successful write
/// * `Err(SessionError::IoError)` - On create, write, sync or rename failure
pub fn write_private_file<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            SessionError::IoError(format!(
                "failed to create parent directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = generate_temp_path(path)?;
    write_and_sync(&temp_path, content)?;
    replace(&temp_path, path)
}

/// Recursively remove `path`. A directory that is already gone is not an error.
pub fn remove_dir_all<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    match fs::remove_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(SessionError::IoError(format!(
            "failed to remove '{}': {}",
            path.display(),
            e
        ))),
    }
}

fn generate_temp_path(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| SessionError::IoError(format!("invalid file path '{}'", target.display())))?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn open_private(path: &Path) -> std::io::Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    options.open(path)
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    // A stale temp file could carry wider permissions from an earlier umask.
    let _ = fs::remove_file(path);

    let mut file = open_private(path).map_err(|e| {
        SessionError::IoError(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.write_all(content).map_err(|e| {
        let _ = fs::remove_file(path);
        SessionError::IoError(format!("failed to write to temporary file: {}", e))
    })?;

    file.sync_all().map_err(|e| {
        let _ = fs::remove_file(path);
        SessionError::IoError(format!("failed to sync temporary file to disk: {}", e))
    })?;

    Ok(())
}

fn replace(source: &Path, target: &Path) -> Result<()> {
    #[cfg(windows)]
    {
        // rename() does not overwrite an existing file on Windows.
        if target.exists() {
            let _ = fs::remove_file(target);
        }
    }

    fs::rename(source, target).map_err(|e| {
        let _ = fs::remove_file(source);
        SessionError::IoError(format!("failed to replace '{}': {}", target.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_private_file_new_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("credentials");

        write_private_file(&file_path, b"secret").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "secret");
        assert!(!temp_dir.path().join(".credentials.tmp").exists());
    }

    #[test]
    fn test_write_private_file_replaces_existing() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("credentials");
        fs::write(&file_path, "old").unwrap();

        write_private_file(&file_path, b"new").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "new");
    }

    #[test]
    fn test_write_private_file_creates_parent() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("a").join("b").join("credentials");

        write_private_file(&file_path, b"x").unwrap();

        assert!(file_path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_write_private_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("credentials");
        write_private_file(&file_path, b"secret").unwrap();

        let mode = fs::metadata(&file_path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_remove_dir_all_missing_is_ok() {
        let temp_dir = TempDir::new().unwrap();
        assert!(remove_dir_all(temp_dir.path().join("missing")).is_ok());
    }

    #[test]
    fn test_remove_dir_all_removes_tree() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("repo");
        fs::create_dir_all(root.join("nested")).unwrap();
        fs::write(root.join("nested").join("f.txt"), "x").unwrap();

        remove_dir_all(&root).unwrap();

        assert!(!root.exists());
    }
}
