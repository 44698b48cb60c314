//! History log for the browser window.
//!
//! Implements `HistoryManagerTrait`: an append-only, in-memory list of every
//! address the session visited, unique by exact address string. Nothing is
//! written to disk; the log dies with the window.

use url::Url;

use crate::types::history::{HistoryEntry, DISPLAY_SEPARATOR};

/// Trait defining history log operations.
pub trait HistoryManagerTrait {
    fn record(&mut self, address: &str) -> bool;
    fn entries(&self) -> &[HistoryEntry];
    fn display_lines(&self) -> Vec<String>;
    fn contains(&self, address: &str) -> bool;
    fn clear(&mut self);
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;
}

/// Session-scoped history log owned by the browser window.
#[derive(Debug, Default, Clone)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Host component of `address`, or an empty string when it has none.
pub fn host_of(address: &str) -> String {
    Url::parse(address)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_default()
}

/// Recovers the address from a history list line (`"{host} - {address}"`).
///
/// Hosts never contain spaces, so the line is cut at the first separator
/// and the address keeps any `" - "` of its own. A last-separator split
/// would lose everything before a `" - "` inside the address. Text without
/// a separator is taken as an address as-is.
pub fn address_from_display(text: &str) -> &str {
    text.split_once(DISPLAY_SEPARATOR)
        .map(|(_, address)| address)
        .unwrap_or(text)
}

impl HistoryManagerTrait for HistoryLog {
    /// Appends `address` unless an entry with the identical string exists.
    /// Returns whether an entry was added.
    fn record(&mut self, address: &str) -> bool {
        if self.contains(address) {
            return false;
        }
        self.entries.push(HistoryEntry {
            address: address.to_string(),
            host: host_of(address),
        });
        true
    }

    fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Lines shown in the history panel, oldest first.
    fn display_lines(&self) -> Vec<String> {
        self.entries.iter().map(HistoryEntry::display_text).collect()
    }

    fn contains(&self, address: &str) -> bool {
        self.entries.iter().any(|e| e.address == address)
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
