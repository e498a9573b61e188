use serde::{Deserialize, Serialize};

/// Behaviour switches for the goods record manager.
///
/// The default is permissive: registering an existing reference silently
/// replaces the record, and inspect accepts any status string from any
/// current status.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractConfig {
    /// Fail register with `AlreadyRegistered` when the reference exists.
    pub reject_reregistration: bool,
    /// Only allow `pending → passed` and `pending → failed` on inspect.
    pub enforce_transitions: bool,
}

impl ContractConfig {
    /// Both strict modes enabled.
    pub fn strict() -> Self {
        Self {
            reject_reregistration: true,
            enforce_transitions: true,
        }
    }

    pub fn is_permissive(&self) -> bool {
        !self.reject_reregistration && !self.enforce_transitions
    }
}
