//! Domain building blocks shared by the warehouse crates.
//!
//! This crate contains **pure domain** primitives shared by the ledger crates
//! (no storage, no I/O).

pub mod entity;
pub mod error;
pub mod id;
pub mod normalize;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::ItemId;
pub use normalize::simplify;
