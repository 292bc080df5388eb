//! History domain module.
//!
//! The ledger records each successful generation round so that error-fix
//! requests can replay the whole conversation to the model.
//!
//! # Module Structure
//!
//! - `entry`: A single round (`HistoryEntry`, `EntryKind`)
//! - `ledger`: Append-only, session-scoped log (`HistoryLedger`)

mod entry;
mod ledger;

// Re-export public API
pub use entry::{EntryKind, HistoryEntry};
pub use ledger::HistoryLedger;
