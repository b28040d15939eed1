//! Flat-file key-value memory store.
//!
//! One JSON object in one file; every call fully reads and fully rewrites
//! it. Concurrent writers can race and lose updates — last write wins, by
//! design. The file path is injected at construction so the store is
//! relocatable and testable.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Error;

/// Persistent key-value memory backed by a single JSON file.
pub struct MemoryStore {
    path: PathBuf,
}

impl MemoryStore {
    /// Create a store at the given file path.
    ///
    /// The file is created lazily on the first write; a missing file reads
    /// as an empty mapping.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the store's file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Store a value under a key, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] or [`Error::Serialization`] if the file cannot
    /// be read or rewritten.
    pub fn remember(&self, key: &str, value: &str) -> Result<(), Error> {
        let mut memory = self.load()?;
        memory.insert(key.to_string(), value.to_string());
        self.save(&memory)
    }

    /// Look up a value, `None` if the key was never stored or forgotten.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] or [`Error::Serialization`] if the file cannot
    /// be read.
    pub fn recall(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.load()?.remove(key))
    }

    /// Get the entire mapping.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] or [`Error::Serialization`] if the file cannot
    /// be read.
    pub fn recall_all(&self) -> Result<BTreeMap<String, String>, Error> {
        self.load()
    }

    /// Remove a key. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] or [`Error::Serialization`] if the file cannot
    /// be read or rewritten.
    pub fn forget(&self, key: &str) -> Result<(), Error> {
        let mut memory = self.load()?;
        memory.remove(key);
        self.save(&memory)
    }

    /// Clear the entire mapping.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be rewritten.
    pub fn forget_all(&self) -> Result<(), Error> {
        self.save(&BTreeMap::new())
    }

    fn load(&self) -> Result<BTreeMap<String, String>, Error> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        serde_json::from_str(&raw).map_err(Error::from)
    }

    fn save(&self, memory: &BTreeMap<String, String>) -> Result<(), Error> {
        let raw = serde_json::to_string_pretty(memory)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> MemoryStore {
        MemoryStore::new(dir.path().join("memory.json"))
    }

    #[test]
    fn remember_then_recall_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);

        store.remember("k", "v").expect("remember should succeed");
        assert_eq!(store.recall("k").expect("recall"), Some("v".to_string()));
    }

    #[test]
    fn remember_overwrites_previous_value() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);

        store.remember("k", "v1").expect("remember");
        store.remember("k", "v2").expect("remember");
        assert_eq!(store.recall("k").expect("recall"), Some("v2".to_string()));
    }

    #[test]
    fn forget_removes_a_single_key() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);

        store.remember("k", "v").expect("remember");
        store.remember("other", "w").expect("remember");
        store.forget("k").expect("forget should succeed");

        assert_eq!(store.recall("k").expect("recall"), None);
        assert_eq!(store.recall("other").expect("recall"), Some("w".to_string()));
    }

    #[test]
    fn forget_all_empties_the_mapping() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);

        store.remember("a", "1").expect("remember");
        store.remember("b", "2").expect("remember");
        store.forget_all().expect("forget_all should succeed");

        assert!(store.recall_all().expect("recall_all").is_empty());
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);

        assert!(store.recall_all().expect("recall_all").is_empty());
        assert_eq!(store.recall("k").expect("recall"), None);
    }

    #[test]
    fn forgetting_an_absent_key_is_not_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);

        store.forget("never-stored").expect("forget should succeed");
    }
}
