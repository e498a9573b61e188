use gil_store::KvStore;
use gil_types::{GoodsRecord, InspectionStatus, TypeError};
use tracing::{debug, info, warn};

use crate::command::Command;
use crate::config::ContractConfig;
use crate::error::{ContractError, ContractResult};

/// Registers, inspects, deletes, and queries goods records.
///
/// The manager holds no record state of its own. Each operation reads or
/// writes the injected store directly and touches only the key equal to the
/// record's reference. Concurrent writes to the same key are the store's
/// concern.
pub struct GoodsRecordManager<S> {
    store: S,
    config: ContractConfig,
}

impl<S: KvStore> GoodsRecordManager<S> {
    /// A permissive manager over `store`.
    pub fn new(store: S) -> Self {
        Self::with_config(store, ContractConfig::default())
    }

    pub fn with_config(store: S, config: ContractConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &ContractConfig {
        &self.config
    }

    /// Open a `pending` record for `reference`.
    ///
    /// Overwrites any record already stored under `reference` unless
    /// `reject_reregistration` is set.
    pub fn register(
        &self,
        reference: &str,
        counterpart: &str,
        inspector: &str,
    ) -> ContractResult<()> {
        require("reference", reference)?;
        require("counterpart", counterpart)?;
        require("inspector", inspector)?;

        if self.config.reject_reregistration && self.exists(reference)? {
            warn!(reference, "rejecting re-registration");
            return Err(ContractError::AlreadyRegistered(reference.to_string()));
        }

        let record = GoodsRecord::registered(reference, counterpart, inspector);
        self.write(&record)?;
        info!(reference, counterpart, inspector, "registered goods");
        Ok(())
    }

    /// Attach an inspection outcome and document to an existing record.
    ///
    /// Counterpart and inspector are always taken from the stored record.
    pub fn inspect(
        &self,
        reference: &str,
        status: InspectionStatus,
        document: &str,
    ) -> ContractResult<()> {
        let existing = self.record(reference)?;
        if self.config.enforce_transitions && !existing.status.can_transition_to(&status) {
            warn!(
                reference,
                from = %existing.status,
                to = %status,
                "rejecting status transition"
            );
            return Err(ContractError::InvalidTransition {
                reference: reference.to_string(),
                from: existing.status,
                to: status,
            });
        }

        let updated = existing.inspected(reference, status, document);
        self.write(&updated)?;
        info!(reference, status = %updated.status, document, "inspected goods");
        Ok(())
    }

    /// Remove the record for `reference`. Removing a missing record succeeds.
    pub fn delete(&self, reference: &str) -> ContractResult<()> {
        self.store
            .delete(reference)
            .map_err(|source| ContractError::StoreWrite {
                reference: reference.to_string(),
                source,
            })?;
        info!(reference, "deleted goods");
        Ok(())
    }

    /// The stored bytes of the record for `reference`, exactly as written.
    pub fn query(&self, reference: &str) -> ContractResult<Vec<u8>> {
        debug!(reference, "querying goods");
        self.read(reference)
    }

    /// The decoded record for `reference`.
    pub fn record(&self, reference: &str) -> ContractResult<GoodsRecord> {
        let bytes = self.read(reference)?;
        GoodsRecord::from_bytes(&bytes).map_err(|e| ContractError::Deserialization {
            reference: reference.to_string(),
            reason: type_error_reason(e),
        })
    }

    /// Run a decoded command. Only `Query` produces a payload.
    pub fn execute(&self, command: Command) -> ContractResult<Option<Vec<u8>>> {
        debug!(
            function = command.function(),
            reference = command.reference(),
            "executing command"
        );
        match command {
            Command::Register {
                reference,
                counterpart,
                inspector,
            } => self.register(&reference, &counterpart, &inspector).map(|()| None),
            Command::Inspect {
                reference,
                status,
                document,
            } => self
                .inspect(&reference, InspectionStatus::from(status), &document)
                .map(|()| None),
            Command::Delete { reference } => self.delete(&reference).map(|()| None),
            Command::Query { reference } => self.query(&reference).map(Some),
        }
    }

    fn exists(&self, reference: &str) -> ContractResult<bool> {
        self.store
            .contains(reference)
            .map_err(|source| ContractError::StoreRead {
                reference: reference.to_string(),
                source,
            })
    }

    fn read(&self, reference: &str) -> ContractResult<Vec<u8>> {
        self.store
            .get(reference)
            .map_err(|source| ContractError::StoreRead {
                reference: reference.to_string(),
                source,
            })?
            .ok_or_else(|| ContractError::NotFound(reference.to_string()))
    }

    fn write(&self, record: &GoodsRecord) -> ContractResult<()> {
        let bytes = record.to_bytes().map_err(|e| ContractError::Serialization {
            reference: record.reference.clone(),
            reason: type_error_reason(e),
        })?;
        self.store
            .put(&record.reference, &bytes)
            .map_err(|source| ContractError::StoreWrite {
                reference: record.reference.clone(),
                source,
            })
    }
}

fn require(name: &str, value: &str) -> ContractResult<()> {
    if value.is_empty() {
        return Err(ContractError::InvalidArgument(format!("{name} must not be empty")));
    }
    Ok(())
}

fn type_error_reason(err: TypeError) -> String {
    match err {
        TypeError::Serialization(reason) | TypeError::Deserialization(reason) => reason,
    }
}
