//! Store doubles shared by the unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use gil_store::{InMemoryKvStore, KvStore, StoreError, StoreResult};

/// In-memory store that counts every call.
#[derive(Debug, Default)]
pub struct CountingStore {
    pub inner: InMemoryKvStore,
    gets: AtomicUsize,
    puts: AtomicUsize,
    deletes: AtomicUsize,
}

impl CountingStore {
    pub fn gets(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub fn puts(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }

    pub fn deletes(&self) -> usize {
        self.deletes.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> usize {
        self.gets() + self.puts() + self.deletes()
    }
}

impl KvStore for CountingStore {
    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.inner.get(key)
    }

    fn put(&self, key: &str, value: &[u8]) -> StoreResult<()> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        self.inner.put(key, value)
    }

    fn delete(&self, key: &str) -> StoreResult<()> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        self.inner.delete(key)
    }
}

/// Store whose reads and/or writes always fail.
#[derive(Debug, Default)]
pub struct FailingStore {
    pub inner: InMemoryKvStore,
    pub fail_reads: bool,
    pub fail_writes: bool,
}

impl FailingStore {
    pub fn failing_reads() -> Self {
        Self {
            fail_reads: true,
            ..Default::default()
        }
    }

    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Default::default()
        }
    }
}

fn unavailable(op: &'static str, key: &str) -> StoreError {
    StoreError::Host {
        op,
        key: key.to_string(),
        reason: "ledger unavailable".into(),
    }
}

impl KvStore for FailingStore {
    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        if self.fail_reads {
            return Err(unavailable("get", key));
        }
        self.inner.get(key)
    }

    fn put(&self, key: &str, value: &[u8]) -> StoreResult<()> {
        if self.fail_writes {
            return Err(unavailable("put", key));
        }
        self.inner.put(key, value)
    }

    fn delete(&self, key: &str) -> StoreResult<()> {
        if self.fail_writes {
            return Err(unavailable("delete", key));
        }
        self.inner.delete(key)
    }
}
