//! File-backed key-value store.
//!
//! Each key maps to one file under a root directory. Keys are restricted to a
//! safe character set so they can never escape the root.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use folio_types::error::{FolioError, Result};

use crate::KeyValueStore;

/// A key-value store persisting each key as `<root>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        log::debug!("file store opened at {}", root.display());
        Ok(Self { root })
    }

    /// The directory backing this store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        if !is_valid_key(key) {
            return Err(FolioError::Store(format!("invalid key: {key:?}")));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

/// Keys are non-empty and limited to ASCII alphanumerics, `-`, `_` and `.`,
/// and may not start with `.`.
fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        // Replace atomically: write a sibling temp file, then rename.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("nested").join("data");
        let store = FileStore::open(&root).unwrap();
        assert!(store.root().is_dir());
    }

    #[test]
    fn get_missing_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        assert_eq!(store.get("portfolio-history").unwrap(), None);
        assert!(!store.contains("portfolio-history"));
    }

    #[test]
    fn set_get_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();
        store.set("portfolio-history", "[\"about\",\"help\"]").unwrap();
        assert_eq!(
            store.get("portfolio-history").unwrap().as_deref(),
            Some("[\"about\",\"help\"]")
        );
        assert!(dir.path().join("portfolio-history.json").is_file());
    }

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut store = FileStore::open(dir.path()).unwrap();
            store.set("k", "persisted").unwrap();
        }
        let store = FileStore::open(dir.path()).unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("persisted"));
    }

    #[test]
    fn set_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();
        store.set("k", "v").unwrap();
        assert!(!dir.path().join("k.json.tmp").exists());
    }

    #[test]
    fn remove_deletes_and_tolerates_absent() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();
        store.set("k", "v").unwrap();
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
        store.remove("k").unwrap();
    }

    #[test]
    fn traversal_keys_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();
        for key in ["../escape", "a/b", "", ".hidden", "sp ace"] {
            let err = store.set(key, "x").unwrap_err();
            assert!(matches!(err, FolioError::Store(_)), "key {key:?}");
        }
    }
}
