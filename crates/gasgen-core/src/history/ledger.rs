//! Append-only log of generation rounds.

use super::entry::HistoryEntry;

/// Session-scoped history of generation rounds, oldest first.
///
/// Entries are never edited or removed individually; the only way to shrink
/// the ledger is [`HistoryLedger::reset`], which the session calls when a new
/// initial generation succeeds.
#[derive(Debug, Clone, Default)]
pub struct HistoryLedger {
    entries: Vec<HistoryEntry>,
}

impl HistoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry and returns its id.
    pub fn append(&mut self, entry: HistoryEntry) -> String {
        let id = entry.id.clone();
        self.entries.push(entry);
        id
    }

    pub fn reset(&mut self) {
        self.entries.clear();
    }

    pub fn all(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
