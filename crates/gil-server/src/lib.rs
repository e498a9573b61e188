//! HTTP development host for the Goods Inspection Ledger.
//!
//! Stands in for a ledger host: owns a store, calls the contract's `init`
//! hook once, and exposes the `invoke` and `query` entry points over HTTP.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::GilServer;
