//! Key-value storage for the Goods Inspection Ledger.
//!
//! Goods records live in a store owned by the ledger host. This crate
//! describes that store as a capability, [`KvStore`], so the record manager
//! can run against any backend without knowing how durability or
//! multi-party agreement are achieved.
//!
//! # Storage Backends
//!
//! - [`InMemoryKvStore`] -- `BTreeMap`-based store for tests, embedding, and
//!   the development host
//! - [`HostStateAdapter`] -- wraps a raw [`HostState`] interface that signals
//!   absence with an empty payload
//!
//! # Design Rules
//!
//! 1. Absence is `Ok(None)`, never an empty payload.
//! 2. Deleting a missing key succeeds.
//! 3. The store never interprets values -- it is a pure key-value store.
//! 4. Backend errors are propagated, never silently ignored.

pub mod error;
pub mod host;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use host::{HostState, HostStateAdapter};
pub use memory::InMemoryKvStore;
pub use traits::KvStore;
