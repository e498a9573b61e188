use std::sync::Arc;

use crate::error::StoreResult;

/// Key-value store holding serialized goods records.
///
/// All implementations must satisfy these invariants:
/// - `get` returns `Ok(None)` for a missing key. An error means the read
///   itself failed, never that the key is absent.
/// - `put` unconditionally replaces any existing value.
/// - `delete` is idempotent: removing a missing key is not an error.
/// - The store never interprets values.
pub trait KvStore: Send + Sync {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>>;

    /// Write `value` under `key`, overwriting any previous value.
    fn put(&self, key: &str, value: &[u8]) -> StoreResult<()>;

    /// Remove `key` from the store.
    fn delete(&self, key: &str) -> StoreResult<()>;

    /// Check whether a value is stored under `key`.
    ///
    /// Default implementation calls `get()`. Backends may override when an
    /// existence check is cheaper than a read.
    fn contains(&self, key: &str) -> StoreResult<bool> {
        Ok(self.get(key)?.is_some())
    }
}

impl<S: KvStore + ?Sized> KvStore for Arc<S> {
    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: &[u8]) -> StoreResult<()> {
        (**self).put(key, value)
    }

    fn delete(&self, key: &str) -> StoreResult<()> {
        (**self).delete(key)
    }

    fn contains(&self, key: &str) -> StoreResult<bool> {
        (**self).contains(key)
    }
}
