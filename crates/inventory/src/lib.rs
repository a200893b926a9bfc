//! Inventory ledger domain.
//!
//! This crate contains the warehouse and its rules, implemented purely as
//! deterministic in-memory logic (no I/O, no persistence).

pub mod compare;
pub mod good;
pub mod numbering;
pub mod upkeep;
pub mod warehouse;

pub use compare::{equal, same_category, Field, FieldValue, COUNT_FIELD};
pub use good::{Category, Electronics, Good, Kind, Medical, Perishable, Transport};
pub use numbering::next_id;
pub use warehouse::{AddOutcome, Warehouse};
