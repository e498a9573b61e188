use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome attached to a goods record by its inspector.
///
/// Every record starts out [`Pending`](Self::Pending). The inspect operation
/// may replace the status with any string: the well-known outcomes map onto
/// named variants and anything else is kept verbatim in
/// [`Other`](Self::Other), so decoding never rejects a stored status and
/// re-encoding reproduces it exactly.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InspectionStatus {
    /// Registered, awaiting inspection.
    #[default]
    Pending,
    /// Inspection passed.
    Passed,
    /// Inspection failed.
    Failed,
    /// Free-form status supplied by the inspector.
    Other(String),
}

impl InspectionStatus {
    pub const PENDING: &'static str = "pending";
    pub const PASSED: &'static str = "passed";
    pub const FAILED: &'static str = "failed";

    /// The wire representation of this status.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => Self::PENDING,
            Self::Passed => Self::PASSED,
            Self::Failed => Self::FAILED,
            Self::Other(s) => s,
        }
    }

    /// Returns `true` for the initial status of a freshly registered record.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Returns `true` for `passed` and `failed`.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Passed | Self::Failed)
    }

    /// Whether the strict lifecycle allows moving from `self` to `next`.
    ///
    /// Only `pending → passed` and `pending → failed` are allowed. The
    /// permissive default never consults this.
    pub fn can_transition_to(&self, next: &InspectionStatus) -> bool {
        self.is_pending() && next.is_final()
    }
}

impl From<String> for InspectionStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            Self::PENDING => Self::Pending,
            Self::PASSED => Self::Passed,
            Self::FAILED => Self::Failed,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for InspectionStatus {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<InspectionStatus> for String {
    fn from(status: InspectionStatus) -> Self {
        match status {
            InspectionStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for InspectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
