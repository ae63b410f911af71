//! Usage infrastructure: the ledger service and its durable store

mod file_store;
mod ledger;

pub use file_store::JsonFileStore;
pub use ledger::UsageLedger;
