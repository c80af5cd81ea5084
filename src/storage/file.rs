//! File-based storage implementation.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{PharmaError, Result};
use crate::storage::traits::{Storage, validate_key};

const TEMP_SUFFIX: &str = ".tmp";

/// Stores each key as one file inside a directory.
///
/// Writes go to a temporary sibling first and are renamed into place, so a
/// crash never leaves a half-written value behind. A write that fails
/// removes its temporary file.
#[derive(Debug, Clone)]
pub struct FileStorage {
    /// The root directory for storage.
    directory: PathBuf,
}

impl FileStorage {
    /// Open (creating if needed) a storage directory.
    pub fn new<P: AsRef<Path>>(directory: P) -> Result<Self> {
        let directory = directory.as_ref().to_path_buf();

        if !directory.exists() {
            fs::create_dir_all(&directory)
                .map_err(|e| PharmaError::storage(format!("Failed to create directory: {e}")))?;
        }

        if !directory.is_dir() {
            return Err(PharmaError::storage(format!(
                "Path is not a directory: {}",
                directory.display()
            )));
        }

        Ok(FileStorage { directory })
    }

    /// The root directory.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn file_path(&self, key: &str) -> PathBuf {
        self.directory.join(key)
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>> {
        validate_key(key)?;
        match fs::read(self.file_path(key)) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PharmaError::storage(format!("Failed to read {key}: {e}"))),
        }
    }

    fn write(&self, key: &str, data: &[u8]) -> Result<()> {
        validate_key(key)?;
        let path = self.file_path(key);
        let temp_path = self.file_path(&format!(".{key}{TEMP_SUFFIX}"));

        if let Err(e) = write_and_replace(&temp_path, &path, data) {
            if temp_path.exists() {
                let _ = fs::remove_file(&temp_path);
            }
            return Err(PharmaError::storage(format!("Failed to write {key}: {e}")));
        }
        debug!("wrote {} bytes to {}", data.len(), path.display());
        Ok(())
    }

    fn exists(&self, key: &str) -> bool {
        validate_key(key).is_ok() && self.file_path(key).is_file()
    }

    fn delete(&self, key: &str) -> Result<()> {
        validate_key(key)?;
        match fs::remove_file(self.file_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(PharmaError::storage(format!("Failed to delete {key}: {e}"))),
        }
    }

    fn list_keys(&self) -> Result<Vec<String>> {
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.directory)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str()
                && validate_key(name).is_ok()
            {
                keys.push(name.to_string());
            }
        }
        keys.sort();
        Ok(keys)
    }
}

fn write_and_replace(temp_path: &Path, path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(temp_path)?;
    file.write_all(data)?;
    file.sync_all()?;
    drop(file);
    fs::rename(temp_path, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_round_trip() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();

        assert_eq!(storage.read("meds").unwrap(), None);
        assert!(!storage.exists("meds"));

        storage.write("meds", b"[\"a\"]").unwrap();
        assert!(storage.exists("meds"));
        assert_eq!(storage.read("meds").unwrap(), Some(b"[\"a\"]".to_vec()));

        storage.write("meds", b"[]").unwrap();
        assert_eq!(storage.read("meds").unwrap(), Some(b"[]".to_vec()));
    }

    #[test]
    fn test_temp_files_are_not_listed() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();
        storage.write("b", b"1").unwrap();
        storage.write("a", b"2").unwrap();
        fs::write(dir.path().join(".c.tmp"), b"junk").unwrap();

        assert_eq!(storage.list_keys().unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_failed_write_cleans_up() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();
        // A non-empty directory in the way makes the final rename fail.
        fs::create_dir_all(dir.path().join("meds").join("inner")).unwrap();

        assert!(matches!(storage.write("meds", b"[]"), Err(PharmaError::Storage(_))));
        assert!(!dir.path().join(".meds.tmp").exists());
        assert!(dir.path().join("meds").is_dir());
    }

    #[test]
    fn test_delete_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();
        storage.write("k", b"v").unwrap();
        storage.delete("k").unwrap();
        storage.delete("k").unwrap();
        assert!(!storage.exists("k"));
    }

    #[test]
    fn test_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        let storage = FileStorage::new(&nested).unwrap();
        assert!(storage.directory().is_dir());
    }

    #[test]
    fn test_rejects_file_as_directory() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("file");
        fs::write(&file, b"x").unwrap();
        assert!(matches!(FileStorage::new(&file), Err(PharmaError::Storage(_))));
    }

    #[test]
    fn test_rejects_bad_keys() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();
        assert!(storage.write("../escape", b"x").is_err());
        assert!(storage.read("").is_err());
    }
}
