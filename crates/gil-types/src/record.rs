use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::status::InspectionStatus;

/// Inspection state of one goods shipment.
///
/// The record is stored under its `reference`. `counterpart` and `inspector`
/// are fixed at registration; an inspection only replaces `status` and
/// `document`, see [`GoodsRecord::inspected`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoodsRecord {
    /// Unique shipment reference, also the store key.
    pub reference: String,
    /// The registering financial entity.
    #[serde(rename = "bank")]
    pub counterpart: String,
    /// Identity of the assigned inspector.
    pub inspector: String,
    /// Current inspection outcome.
    pub status: InspectionStatus,
    /// Opaque reference to the inspection documentation; empty until inspected.
    pub document: String,
}

impl GoodsRecord {
    /// A freshly registered record: status `pending`, no document.
    pub fn registered(
        reference: impl Into<String>,
        counterpart: impl Into<String>,
        inspector: impl Into<String>,
    ) -> Self {
        Self {
            reference: reference.into(),
            counterpart: counterpart.into(),
            inspector: inspector.into(),
            status: InspectionStatus::Pending,
            document: String::new(),
        }
    }

    /// The record after an inspection.
    ///
    /// `counterpart` and `inspector` are carried forward from `self`; they
    /// cannot be changed by an inspection.
    pub fn inspected(
        &self,
        reference: impl Into<String>,
        status: InspectionStatus,
        document: impl Into<String>,
    ) -> Self {
        Self {
            reference: reference.into(),
            counterpart: self.counterpart.clone(),
            inspector: self.inspector.clone(),
            status,
            document: document.into(),
        }
    }

    /// Encode to the JSON wire format.
    pub fn to_bytes(&self) -> Result<Vec<u8>, TypeError> {
        serde_json::to_vec(self).map_err(|e| TypeError::Serialization(e.to_string()))
    }

    /// Decode from the JSON wire format.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TypeError> {
        serde_json::from_slice(bytes).map_err(|e| TypeError::Deserialization(e.to_string()))
    }
}
