//! Typed operations decoded from a host invocation.
//!
//! Hosts call the contract with a function name and a list of positional
//! string arguments. [`Command`] turns that into one typed value per
//! operation, rejecting unknown names and wrong arities before anything
//! reaches the store.

use serde::{Deserialize, Serialize};

use crate::error::{ContractError, ContractResult};

pub const REGISTER: &str = "register";
pub const INSPECT: &str = "inspect";
pub const DELETE: &str = "delete";
pub const QUERY: &str = "query";

/// Functions accepted by the invoke entry point.
pub const INVOKE_FUNCTIONS: [&str; 3] = [REGISTER, INSPECT, DELETE];

/// Functions accepted by the query entry point.
pub const QUERY_FUNCTIONS: [&str; 1] = [QUERY];

/// Host entry point an invocation arrives through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Entry {
    /// State-changing calls: register, inspect, delete.
    #[default]
    Invoke,
    /// Read-only calls: query.
    Query,
}

/// One goods record operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Register {
        reference: String,
        counterpart: String,
        inspector: String,
    },
    Inspect {
        reference: String,
        status: String,
        document: String,
    },
    Delete {
        reference: String,
    },
    Query {
        reference: String,
    },
}

impl Command {
    /// Decode a call made through the invoke entry point.
    pub fn from_invoke<A: AsRef<str>>(function: &str, args: &[A]) -> ContractResult<Self> {
        match function {
            REGISTER => {
                let [reference, counterpart, inspector] = positional::<_, 3>(function, args)?;
                Ok(Self::Register {
                    reference,
                    counterpart,
                    inspector,
                })
            }
            INSPECT => {
                let [reference, status, document] = positional::<_, 3>(function, args)?;
                Ok(Self::Inspect {
                    reference,
                    status,
                    document,
                })
            }
            DELETE => {
                let [reference] = positional::<_, 1>(function, args)?;
                Ok(Self::Delete { reference })
            }
            other => Err(ContractError::UnknownFunction(other.to_string())),
        }
    }

    /// Decode a call made through the query entry point.
    pub fn from_query<A: AsRef<str>>(function: &str, args: &[A]) -> ContractResult<Self> {
        match function {
            QUERY => {
                let [reference] = positional::<_, 1>(function, args)?;
                Ok(Self::Query { reference })
            }
            other => Err(ContractError::UnknownFunction(other.to_string())),
        }
    }

    pub fn decode<A: AsRef<str>>(entry: Entry, function: &str, args: &[A]) -> ContractResult<Self> {
        match entry {
            Entry::Invoke => Self::from_invoke(function, args),
            Entry::Query => Self::from_query(function, args),
        }
    }

    /// Function name this command was decoded from.
    pub fn function(&self) -> &'static str {
        match self {
            Self::Register { .. } => REGISTER,
            Self::Inspect { .. } => INSPECT,
            Self::Delete { .. } => DELETE,
            Self::Query { .. } => QUERY,
        }
    }

    /// The reference (store key) this command touches.
    pub fn reference(&self) -> &str {
        match self {
            Self::Register { reference, .. }
            | Self::Inspect { reference, .. }
            | Self::Delete { reference }
            | Self::Query { reference } => reference,
        }
    }

    /// Entry point the command belongs to.
    pub fn entry(&self) -> Entry {
        match self {
            Self::Query { .. } => Entry::Query,
            _ => Entry::Invoke,
        }
    }

    /// Returns `true` if executing the command can change the store.
    pub fn is_mutation(&self) -> bool {
        self.entry() == Entry::Invoke
    }
}

/// A host invocation in serialized form, as accepted over HTTP and in
/// invocation scripts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invocation {
    #[serde(default)]
    pub entry: Entry,
    pub function: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl Invocation {
    pub fn invoke(function: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            entry: Entry::Invoke,
            function: function.into(),
            args,
        }
    }

    pub fn query(reference: impl Into<String>) -> Self {
        Self {
            entry: Entry::Query,
            function: QUERY.to_string(),
            args: vec![reference.into()],
        }
    }

    pub fn decode(&self) -> ContractResult<Command> {
        Command::decode(self.entry, &self.function, self.args.as_slice())
    }
}

/// Check the arity of `args` and take them as an owned array.
fn positional<A: AsRef<str>, const N: usize>(
    function: &str,
    args: &[A],
) -> ContractResult<[String; N]> {
    if args.len() != N {
        return Err(ContractError::InvalidArgument(format!(
            "{function}: incorrect number of arguments, expecting {N}, got {}",
            args.len()
        )));
    }
    Ok(std::array::from_fn(|i| args[i].as_ref().to_string()))
}
