//! Foundation types for the Goods Inspection Ledger (GIL).
//!
//! This crate provides the record types shared by every other GIL crate.
//!
//! # Key Types
//!
//! - [`GoodsRecord`]: Inspection state of one goods shipment, keyed by reference
//! - [`InspectionStatus`]: Outcome attached by the inspector (`pending` until inspected)
//!
//! # Wire Format
//!
//! Records are stored as JSON objects with exactly five string fields:
//! `reference`, `bank`, `inspector`, `status`, `document`.

pub mod error;
pub mod record;
pub mod status;

pub use error::TypeError;
pub use record::GoodsRecord;
pub use status::InspectionStatus;
