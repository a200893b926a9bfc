//! Line-oriented front end for the warehouse ledger.
//!
//! Parses commands typed at a prompt and runs them against a
//! [`warehouse_inventory::Warehouse`] owned by the caller.

pub mod command;
pub mod config;
pub mod session;

pub use command::{parse, Command, CommandError};
pub use config::CliConfig;
pub use session::{execute, run, Flow};
