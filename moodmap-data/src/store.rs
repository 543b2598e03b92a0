//! File-backed persistence for favourites and history.

use camino::{Utf8Path, Utf8PathBuf};
use log::debug;
use moodmap_core::{KeyValueStore, StoreError};

/// Default directory holding the store, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = ".moodmap";

/// Stores each key as `<dir>/<key>.json`.
///
/// Writes replace the file atomically through a temporary sibling, so a
/// crash mid-write leaves the previous value intact. The directory is created
/// on first write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileKeyValueStore {
    dir: Utf8PathBuf,
}

impl FileKeyValueStore {
    /// Create a store rooted at `dir`. Nothing is touched until the first
    /// read or write.
    #[must_use]
    pub fn new(dir: impl Into<Utf8PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the store.
    #[must_use]
    pub fn dir(&self) -> &Utf8Path {
        &self.dir
    }

    /// Path of the file backing `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidKey`] unless `key` is a non-empty run of
    /// ASCII letters, digits, `_` or `-`.
    pub fn path_for(&self, key: &str) -> Result<Utf8PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '-');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_owned()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

fn backend_error(operation: &'static str, key: &str, source: std::io::Error) -> StoreError {
    StoreError::Backend {
        operation,
        key: key.to_owned(),
        source: Box::new(source),
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        moodmap_fs::read_to_string_if_exists(&path).map_err(|err| backend_error("read", key, err))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        debug!("writing {} bytes to {path}", value.len());
        moodmap_fs::write_replace(&path, value).map_err(|err| backend_error("write", key, err))
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        debug!("removing {path}");
        moodmap_fs::remove_file_if_exists(&path).map_err(|err| backend_error("remove", key, err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    #[fixture]
    fn store() -> (TempDir, FileKeyValueStore) {
        let temp = TempDir::new().expect("create temp dir");
        let root = Utf8PathBuf::from_path_buf(temp.path().join("data")).expect("utf-8 path");
        (temp, FileKeyValueStore::new(root))
    }

    #[rstest]
    fn missing_key_reads_none(store: (TempDir, FileKeyValueStore)) {
        let (_guard, store) = store;
        assert_eq!(store.get("history").expect("get"), None);
    }

    #[rstest]
    fn set_then_get(store: (TempDir, FileKeyValueStore)) {
        let (_guard, mut store) = store;
        store.set("favorites", "[]").expect("set");
        store.set("favorites", "[1]").expect("overwrite");
        assert_eq!(store.get("favorites").expect("get"), Some("[1]".to_owned()));
        assert!(store.dir().join("favorites.json").exists());
    }

    #[rstest]
    fn remove_deletes_file(store: (TempDir, FileKeyValueStore)) {
        let (_guard, mut store) = store;
        store.set("history", "[]").expect("set");
        store.remove("history").expect("remove");
        store.remove("history").expect("remove missing");
        assert_eq!(store.get("history").expect("get"), None);
    }

    #[rstest]
    #[case("")]
    #[case("../escape")]
    #[case("a/b")]
    #[case("with space")]
    fn rejects_unsafe_keys(store: (TempDir, FileKeyValueStore), #[case] key: &str) {
        let (_guard, store) = store;
        assert!(matches!(store.get(key), Err(StoreError::InvalidKey(_))));
    }
}
