//! Goods record manager for the Goods Inspection Ledger (GIL).
//!
//! This crate is the heart of GIL. It provides:
//! - [`GoodsRecordManager`] -- register, inspect, delete, and query goods
//!   records against any [`gil_store::KvStore`]
//! - [`Command`] -- typed operations decoded once from a function name and
//!   positional arguments
//! - [`GoodsInspectionContract`] -- the `init` / `invoke` / `query` entry
//!   points a ledger host calls
//! - [`ContractConfig`] -- opt-in strict modes (reject re-registration,
//!   enforce status transitions)
//!
//! The manager is stateless: every call reads or writes the store directly
//! and touches exactly one key.

pub mod command;
pub mod config;
pub mod contract;
pub mod error;
pub mod manager;

#[cfg(test)]
mod testing;

pub use command::{Command, Entry, Invocation};
pub use config::ContractConfig;
pub use contract::GoodsInspectionContract;
pub use error::{ContractError, ContractResult};
pub use manager::GoodsRecordManager;
