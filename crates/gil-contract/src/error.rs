use gil_store::StoreError;
use gil_types::InspectionStatus;
use thiserror::Error;

/// Errors produced by goods record operations.
///
/// Every error is terminal for the invocation that raised it. Each operation
/// performs at most one store mutation, so a failure never leaves partial
/// state behind.
#[derive(Debug, Error)]
pub enum ContractError {
    /// Wrong number of arguments, or an argument that must be non-empty is empty.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The function name does not match any operation of the entry point.
    #[error("unknown function: {0:?}")]
    UnknownFunction(String),

    /// No record is stored under the reference.
    #[error("no goods registered under reference {0}")]
    NotFound(String),

    /// The record could not be encoded.
    #[error("cannot encode record {reference}: {reason}")]
    Serialization { reference: String, reason: String },

    /// The stored bytes do not decode to a goods record.
    #[error("cannot decode record {reference}: {reason}")]
    Deserialization { reference: String, reason: String },

    /// The store failed to read, as distinct from the key being absent.
    #[error("store read failed for {reference}: {source}")]
    StoreRead {
        reference: String,
        source: StoreError,
    },

    /// The store failed to write or delete.
    #[error("store write failed for {reference}: {source}")]
    StoreWrite {
        reference: String,
        source: StoreError,
    },

    /// Strict mode: a record already exists under the reference.
    #[error("goods already registered under reference {0}")]
    AlreadyRegistered(String),

    /// Strict mode: the status change is not an allowed transition.
    #[error("cannot move {reference} from {from} to {to}")]
    InvalidTransition {
        reference: String,
        from: InspectionStatus,
        to: InspectionStatus,
    },
}

impl ContractError {
    /// Stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "invalid_argument",
            Self::UnknownFunction(_) => "unknown_function",
            Self::NotFound(_) => "not_found",
            Self::Serialization { .. } => "serialization_error",
            Self::Deserialization { .. } => "deserialization_error",
            Self::StoreRead { .. } => "store_read_error",
            Self::StoreWrite { .. } => "store_write_error",
            Self::AlreadyRegistered(_) => "already_registered",
            Self::InvalidTransition { .. } => "invalid_transition",
        }
    }

    /// Returns `true` for errors caused by the caller's input rather than the
    /// stored state or the store itself.
    pub fn is_caller_error(&self) -> bool {
        matches!(self, Self::InvalidArgument(_) | Self::UnknownFunction(_))
    }
}

/// Result alias for contract operations.
pub type ContractResult<T> = Result<T, ContractError>;
