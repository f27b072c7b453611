//! Key-value persistence for client state.
//!
//! Everything that the admin keeps in the browser (session, demo data) goes
//! through [`KeyValueStore`], so screens can be moved to the backend, or
//! tested, by swapping the store.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to write \"{key}\": {reason}")]
    Write { key: String, reason: String },
    #[error("stored \"{key}\" is not valid JSON: {reason}")]
    Corrupt { key: String, reason: String },
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str);
}

/// Reads a JSON value; a missing key is `Ok(None)`
pub fn load_json<T, S>(store: &S, key: &str) -> Result<Option<T>, StorageError>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match store.get(key) {
        None => Ok(None),
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StorageError::Corrupt {
                key: key.to_string(),
                reason: e.to_string(),
            }),
    }
}

pub fn save_json<T, S>(store: &S, key: &str, value: &T) -> Result<(), StorageError>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|e| StorageError::Write {
        key: key.to_string(),
        reason: e.to_string(),
    })?;
    store.set(key, &raw)
}

// ============================================================================
// Browser localStorage
// ============================================================================

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::storage().ok_or(StorageError::Unavailable)?;
        storage.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: format!("{e:?}"),
        })
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

// ============================================================================
// In-memory store (tests, private browsing fallback)
// ============================================================================

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trip_and_missing_key() {
        let store = MemoryStore::new();
        assert_eq!(load_json::<Vec<u32>, _>(&store, "nums").unwrap(), None);

        save_json(&store, "nums", &vec![1u32, 2, 3]).unwrap();
        assert_eq!(
            load_json::<Vec<u32>, _>(&store, "nums").unwrap(),
            Some(vec![1, 2, 3])
        );
    }

    #[test]
    fn test_corrupt_value_is_reported() {
        let store = MemoryStore::new();
        store.set("discounts", "{not json").unwrap();
        let err = load_json::<Vec<u32>, _>(&store, "discounts").unwrap_err();
        assert!(matches!(err, StorageError::Corrupt { ref key, .. } if key == "discounts"));
    }

    #[test]
    fn test_clones_share_contents() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set("accessToken", "abc").unwrap();
        assert_eq!(other.get("accessToken").as_deref(), Some("abc"));
        other.remove("accessToken");
        assert!(store.is_empty());
    }
}
