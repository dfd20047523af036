//! Persistence for the ledger blob

pub mod file_io;
pub mod ledger;

pub use ledger::{Ledger, LedgerStore, SCHEMA_VERSION};
