//! Filesystem helpers integrated with the crate's error handling.

use crate::error::CoreError;
use std::fs;
use std::path::Path;

/// Ensures that a directory exists at the given path, creating it (and any
/// missing parents) when necessary.
///
/// # Errors
///
/// Returns [`CoreError::Filesystem`] if the path exists but is not a
/// directory, or if creation fails.
pub fn ensure_dir_exists(path: &Path) -> Result<(), CoreError> {
    if path.exists() {
        if !path.is_dir() {
            return Err(CoreError::Filesystem {
                message: "Path exists but is not a directory".to_string(),
                path: path.to_path_buf(),
                source: std::io::Error::new(
                    std::io::ErrorKind::AlreadyExists,
                    "Path exists but is not a directory",
                ),
            });
        }
        return Ok(());
    }
    fs::create_dir_all(path).map_err(|source| CoreError::Filesystem {
        message: "Failed to create directory".to_string(),
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn ensure_dir_exists_creates_nested_directories() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        ensure_dir_exists(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn ensure_dir_exists_is_idempotent() {
        let dir = tempdir().unwrap();
        ensure_dir_exists(dir.path()).unwrap();
        ensure_dir_exists(dir.path()).unwrap();
    }

    #[test]
    fn ensure_dir_exists_rejects_file_path() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("occupied");
        std::fs::write(&file_path, b"x").unwrap();
        let result = ensure_dir_exists(&file_path);
        assert!(matches!(result, Err(CoreError::Filesystem { .. })));
    }
}
