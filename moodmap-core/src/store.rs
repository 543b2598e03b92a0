//! Persistence contract for favourites and search history.
//!
//! The store is a flat string key-value map that survives across sessions.
//! Each collection lives under a fixed key as a JSON array and is rewritten
//! in full after every mutation.

use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Key holding the JSON array of favourite places.
pub const FAVORITES_KEY: &str = "favorites";
/// Key holding the JSON array of past search queries.
pub const HISTORY_KEY: &str = "history";

/// Errors raised by a [`KeyValueStore`] backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The key cannot be represented by the backend.
    #[error("invalid store key {0:?}")]
    InvalidKey(String),
    /// The backend failed to read, write or remove an entry.
    #[error("failed to {operation} store key {key:?}")]
    Backend {
        /// Operation that failed.
        operation: &'static str,
        /// Key involved.
        key: String,
        /// Backend error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Errors raised while loading or saving a persisted collection.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The underlying store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// The stored value was not a JSON array of the expected records.
    #[error("stored {key} could not be decoded")]
    Decode {
        /// Key involved.
        key: &'static str,
        /// Decoder error.
        #[source]
        source: serde_json::Error,
    },
    /// The collection could not be encoded.
    #[error("failed to encode {key}")]
    Encode {
        /// Key involved.
        key: &'static str,
        /// Encoder error.
        #[source]
        source: serde_json::Error,
    },
}

/// String key-value storage surviving across sessions.
pub trait KeyValueStore {
    /// Read the value under `key`, if any.
    ///
    /// # Errors
    /// Returns [`StoreError`] when the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value under `key`.
    ///
    /// # Errors
    /// Returns [`StoreError`] when the backend cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete `key`; deleting a missing key succeeds.
    ///
    /// # Errors
    /// Returns [`StoreError`] when the backend cannot be modified.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-memory store, lost when dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryKeyValueStore {
    entries: HashMap<String, String>,
}

impl MemoryKeyValueStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with one entry.
    #[must_use]
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            entries: HashMap::from([(key.into(), value.into())]),
        }
    }

    /// Whether `key` currently holds a value.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Load the JSON array stored under `key`; a missing key is empty.
///
/// # Errors
/// Returns [`PersistenceError`] when the store fails or the value does not
/// decode into `Vec<T>`.
pub fn load_collection<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &'static str,
) -> Result<Vec<T>, PersistenceError> {
    let Some(raw) = store.get(key)? else {
        return Ok(Vec::new());
    };
    serde_json::from_str(&raw).map_err(|source| PersistenceError::Decode { key, source })
}

/// Serialise `items` as a JSON array and write it under `key`.
///
/// # Errors
/// Returns [`PersistenceError`] when encoding or the store write fails.
pub fn save_collection<'a, T, I>(
    store: &mut dyn KeyValueStore,
    key: &'static str,
    items: I,
) -> Result<(), PersistenceError>
where
    T: Serialize + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let items: Vec<&T> = items.into_iter().collect();
    let payload =
        serde_json::to_string(&items).map_err(|source| PersistenceError::Encode { key, source })?;
    store.set(key, &payload)?;
    Ok(())
}
