//! Host-facing entry points.
//!
//! A ledger host drives the contract through three calls: `init` once at
//! start-up, `invoke` for state changes, and `query` for reads. Each call
//! carries a function name and positional string arguments; both are decoded
//! into a [`Command`] before the [`GoodsRecordManager`] sees them.

use gil_store::KvStore;
use tracing::{debug, info, warn};

use crate::command::{Command, Invocation};
use crate::config::ContractConfig;
use crate::error::{ContractError, ContractResult};
use crate::manager::GoodsRecordManager;

/// The goods inspection contract as seen by a ledger host.
pub struct GoodsInspectionContract<S> {
    manager: GoodsRecordManager<S>,
}

impl<S: KvStore> GoodsInspectionContract<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, ContractConfig::default())
    }

    pub fn with_config(store: S, config: ContractConfig) -> Self {
        Self {
            manager: GoodsRecordManager::with_config(store, config),
        }
    }

    pub fn manager(&self) -> &GoodsRecordManager<S> {
        &self.manager
    }

    /// One-time setup hook. Takes no arguments and sets up no state.
    pub fn init<A: AsRef<str>>(&self, args: &[A]) -> ContractResult<()> {
        if !args.is_empty() {
            return Err(ContractError::InvalidArgument(format!(
                "init: incorrect number of arguments, expecting 0, got {}",
                args.len()
            )));
        }
        info!(config = ?self.manager.config(), "initialising goods inspection contract");
        Ok(())
    }

    /// State-changing entry point: `register`, `inspect`, `delete`.
    pub fn invoke<A: AsRef<str>>(&self, function: &str, args: &[A]) -> ContractResult<()> {
        let command =
            Command::from_invoke(function, args).inspect_err(|e| rejected(function, e))?;
        self.manager.execute(command).map(|_| ())
    }

    /// Read-only entry point: `query`. Returns the stored record bytes.
    pub fn query<A: AsRef<str>>(&self, function: &str, args: &[A]) -> ContractResult<Vec<u8>> {
        let command =
            Command::from_query(function, args).inspect_err(|e| rejected(function, e))?;
        self.manager.query(command.reference())
    }

    /// Dispatch a serialized invocation to the entry point it names.
    pub fn handle(&self, invocation: &Invocation) -> ContractResult<Option<Vec<u8>>> {
        debug!(
            entry = ?invocation.entry,
            function = %invocation.function,
            "handling invocation"
        );
        let command = invocation
            .decode()
            .inspect_err(|e| rejected(&invocation.function, e))?;
        self.manager.execute(command)
    }
}

fn rejected(function: &str, err: &ContractError) {
    warn!(function, error = %err, "rejected invocation");
}
