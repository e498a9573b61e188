//! Adapter over the raw state interface a ledger host hands to its contracts.
//!
//! Ledger hosts commonly expose state as three calls where a read of a
//! missing key returns an empty payload rather than an error. [`HostStateAdapter`]
//! turns that convention into the explicit `Option` the [`KvStore`] contract
//! requires, at the boundary, so nothing downstream ever sees the sentinel.

use tracing::trace;

use crate::error::{StoreError, StoreResult};
use crate::traits::KvStore;

/// Raw state interface provided by a ledger host.
///
/// `get_state` returns an empty payload when the key is absent.
pub trait HostState: Send + Sync {
    type Error: std::fmt::Display;

    fn get_state(&self, key: &str) -> Result<Vec<u8>, Self::Error>;

    fn put_state(&self, key: &str, value: Vec<u8>) -> Result<(), Self::Error>;

    fn del_state(&self, key: &str) -> Result<(), Self::Error>;
}

/// [`KvStore`] backed by a [`HostState`].
///
/// An empty payload is reported as `None`. Because of that, an empty value
/// written through this adapter reads back as absent; goods records are never
/// empty so the manager is unaffected.
pub struct HostStateAdapter<H> {
    host: H,
}

impl<H: HostState> HostStateAdapter<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }

    /// The wrapped host interface.
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn into_inner(self) -> H {
        self.host
    }
}

impl<H: HostState> KvStore for HostStateAdapter<H> {
    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        let payload = self.host.get_state(key).map_err(|e| StoreError::Host {
            op: "get",
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        if payload.is_empty() {
            trace!(key, "host returned empty payload, treating as absent");
            return Ok(None);
        }
        Ok(Some(payload))
    }

    fn put(&self, key: &str, value: &[u8]) -> StoreResult<()> {
        self.host
            .put_state(key, value.to_vec())
            .map_err(|e| StoreError::Host {
                op: "put",
                key: key.to_string(),
                reason: e.to_string(),
            })
    }

    fn delete(&self, key: &str) -> StoreResult<()> {
        self.host.del_state(key).map_err(|e| StoreError::Host {
            op: "delete",
            key: key.to_string(),
            reason: e.to_string(),
        })
    }
}
