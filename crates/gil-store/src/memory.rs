//! In-memory key-value store for tests, embedding, and the development host.

use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::traits::KvStore;

/// An in-memory implementation of [`KvStore`].
///
/// All values live in a `BTreeMap` behind a `RwLock` so one store can be
/// shared across request tasks. Data is lost when the store is dropped.
///
/// Only writes validate keys. The empty key can never hold a value, so
/// reading or deleting it behaves like any other absent key.
#[derive(Default)]
pub struct InMemoryKvStore {
    entries: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl InMemoryKvStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> StoreResult<usize> {
        Ok(self.read_entries()?.len())
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.read_entries()?.is_empty())
    }

    /// All stored keys in ascending order.
    pub fn keys(&self) -> StoreResult<Vec<String>> {
        Ok(self.read_entries()?.keys().cloned().collect())
    }

    fn read_entries(
        &self,
    ) -> StoreResult<std::sync::RwLockReadGuard<'_, BTreeMap<String, Vec<u8>>>> {
        self.entries
            .read()
            .map_err(|e| StoreError::Poisoned(e.to_string()))
    }

    fn write_entries(
        &self,
    ) -> StoreResult<std::sync::RwLockWriteGuard<'_, BTreeMap<String, Vec<u8>>>> {
        self.entries
            .write()
            .map_err(|e| StoreError::Poisoned(e.to_string()))
    }
}

fn check_key(key: &str) -> StoreResult<()> {
    if key.is_empty() {
        return Err(StoreError::InvalidKey(key.to_string()));
    }
    Ok(())
}

impl KvStore for InMemoryKvStore {
    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        Ok(self.read_entries()?.get(key).cloned())
    }

    fn put(&self, key: &str, value: &[u8]) -> StoreResult<()> {
        check_key(key)?;
        self.write_entries()?.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn delete(&self, key: &str) -> StoreResult<()> {
        self.write_entries()?.remove(key);
        Ok(())
    }

    fn contains(&self, key: &str) -> StoreResult<bool> {
        Ok(self.read_entries()?.contains_key(key))
    }
}

impl std::fmt::Debug for InMemoryKvStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.len().unwrap_or_default();
        f.debug_struct("InMemoryKvStore")
            .field("key_count", &count)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn put_then_get() {
        let store = InMemoryKvStore::new();
        store.put("R1", b"record").unwrap();
        assert_eq!(store.get("R1").unwrap(), Some(b"record".to_vec()));
    }

    #[test]
    fn missing_key_is_none() {
        let store = InMemoryKvStore::new();
        assert_eq!(store.get("nope").unwrap(), None);
        assert!(!store.contains("nope").unwrap());
    }

    #[test]
    fn empty_value_is_distinct_from_absence() {
        let store = InMemoryKvStore::new();
        store.put("R1", b"").unwrap();
        assert_eq!(store.get("R1").unwrap(), Some(Vec::new()));
        assert!(store.contains("R1").unwrap());
    }

    #[test]
    fn put_overwrites() {
        let store = InMemoryKvStore::new();
        store.put("R1", b"first").unwrap();
        store.put("R1", b"second").unwrap();
        assert_eq!(store.get("R1").unwrap(), Some(b"second".to_vec()));
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn delete_removes_key() {
        let store = InMemoryKvStore::new();
        store.put("R1", b"record").unwrap();
        store.delete("R1").unwrap();
        assert_eq!(store.get("R1").unwrap(), None);
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn delete_missing_key_succeeds() {
        let store = InMemoryKvStore::new();
        store.delete("never-written").unwrap();
    }

    #[test]
    fn empty_key_rejected_on_write() {
        let store = InMemoryKvStore::new();
        assert!(matches!(store.put("", b"x"), Err(StoreError::InvalidKey(_))));
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn empty_key_reads_as_absent() {
        let store = InMemoryKvStore::new();
        assert_eq!(store.get("").unwrap(), None);
        assert!(!store.contains("").unwrap());
        store.delete("").unwrap();
    }

    #[test]
    fn keys_are_sorted() {
        let store = InMemoryKvStore::new();
        store.put("b", b"2").unwrap();
        store.put("a", b"1").unwrap();
        store.put("c", b"3").unwrap();
        assert_eq!(store.keys().unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn shared_through_arc() {
        let store = Arc::new(InMemoryKvStore::new());
        let handle = Arc::clone(&store);
        handle.put("R1", b"record").unwrap();
        assert!(KvStore::contains(&store, "R1").unwrap());
    }

    #[test]
    fn concurrent_writers() {
        let store = Arc::new(InMemoryKvStore::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    store.put(&format!("R{i}"), b"record").unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(store.len().unwrap(), 8);
    }

    #[test]
    fn debug_shows_count() {
        let store = InMemoryKvStore::new();
        store.put("R1", b"record").unwrap();
        let debug = format!("{store:?}");
        assert!(debug.contains("key_count: 1"));
    }
}
