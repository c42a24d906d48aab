//! Filesystem Helpers
//!
//! Best-effort directory and file primitives with no caching, shared by the
//! store's write path and usable directly for text and log files.

use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::warn;

use crate::error::Result;

// == Ensure Dir ==
/// Idempotently creates `path` and all missing ancestors.
///
/// No-op when the directory already exists.
///
/// # Returns
/// `true` when the directory exists afterwards, `false` on I/O failure.
pub fn ensure_dir(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    match try_ensure_dir(path) {
        Ok(()) => true,
        Err(err) => {
            warn!("Failed to create directory {}: {}", path.display(), err);
            false
        }
    }
}

pub(crate) fn try_ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)?;
    Ok(())
}

// == Safe Write ==
/// Writes `content` to `path`, creating the parent directory as needed.
///
/// # Returns
/// `true` on success, `false` on any I/O failure.
pub fn safe_write(path: impl AsRef<Path>, content: &str) -> bool {
    let path = path.as_ref();
    match try_write(path, content) {
        Ok(()) => true,
        Err(err) => {
            warn!("Failed to write {}: {}", path.display(), err);
            false
        }
    }
}

pub(crate) fn try_write(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

// == Safe Append ==
/// Appends `content` to `path`, creating the file and its parent directory
/// as needed.
///
/// # Returns
/// `true` on success, `false` on any I/O failure.
pub fn safe_append(path: impl AsRef<Path>, content: &str) -> bool {
    let path = path.as_ref();
    match try_append(path, content) {
        Ok(()) => true,
        Err(err) => {
            warn!("Failed to append to {}: {}", path.display(), err);
            false
        }
    }
}

pub(crate) fn try_append(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_dir_creates_nested_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a/b/c");

        assert!(ensure_dir(&nested));
        assert!(nested.is_dir());
    }

    #[test]
    fn test_ensure_dir_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("once");

        assert!(ensure_dir(&dir));
        assert!(ensure_dir(&dir));
        assert!(dir.is_dir());
    }

    #[test]
    fn test_safe_write_creates_parent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("logs/run.txt");

        assert!(safe_write(&path, "line one\n"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "line one\n");
    }

    #[test]
    fn test_safe_write_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("note.txt");

        assert!(safe_write(&path, "first"));
        assert!(safe_write(&path, "second"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_safe_append_accumulates() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("journal/log.txt");

        assert!(safe_append(&path, "one\n"));
        assert!(safe_append(&path, "two\n"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn test_write_under_file_parent_fails() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let path = blocker.join("child.txt");
        assert!(!safe_write(&path, "content"));
        assert!(!safe_append(&path, "content"));
        assert!(!ensure_dir(&path));
    }
}
