//! # File-Backed Cart Storage
//!
//! One file per key inside a data directory. The production analogue of a
//! browser's local storage: small, local, synchronous.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::debug;

use crate::error::{StorageError, StorageResult};
use crate::storage::CartStorage;

/// File-backed key-value storage.
///
/// Keys map directly to file names inside the storage directory, so keys
/// must be valid file names (the fixed cart key is).
///
/// ## Write Durability
/// Writes go to a temp file first and are renamed into place, so a crash
/// mid-write leaves the previous blob intact rather than a truncated one.
#[derive(Debug)]
pub struct FileCartStorage {
    dir: PathBuf,
}

impl FileCartStorage {
    /// Creates a storage rooted at `dir`, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> StorageResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        debug!(dir = %dir.display(), "File storage ready");
        Ok(FileCartStorage { dir })
    }

    /// Creates a storage in the platform data directory for Trolley.
    ///
    /// - macOS: `~/Library/Application Support/com.trolley.cart`
    /// - Windows: `%APPDATA%/trolley/cart/data`
    /// - Linux: `~/.local/share/trolley-cart`
    pub fn in_default_dir() -> StorageResult<Self> {
        let dirs = ProjectDirs::from("com", "trolley", "cart").ok_or_else(|| {
            StorageError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                "no home directory to place the data directory in",
            ))
        })?;
        FileCartStorage::new(dirs.data_dir())
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl CartStorage for FileCartStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::Io(err)),
        }
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let path = self.path_for(key);
        let tmp = temp_path(&path);

        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileCartStorage::new(dir.path()).unwrap();

        assert_eq!(storage.get("trolley.cart.v1").unwrap(), None);
    }

    #[test]
    fn test_set_then_get_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileCartStorage::new(dir.path()).unwrap();

        storage.set("trolley.cart.v1", "[]").unwrap();
        assert_eq!(
            storage.get("trolley.cart.v1").unwrap().as_deref(),
            Some("[]")
        );
    }

    #[test]
    fn test_set_replaces_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileCartStorage::new(dir.path()).unwrap();

        storage.set("k", "first").unwrap();
        storage.set("k", "second").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileCartStorage::new(dir.path()).unwrap();

        storage.set("k", "value").unwrap();
        let entries: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("k")]);
    }
}
