use serde::{Deserialize, Serialize};

/// Separator between host and address in the history list.
pub const DISPLAY_SEPARATOR: &str = " - ";

/// One visited address in the session history log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryEntry {
    pub address: String,
    /// Host component of `address`; empty when it has none.
    pub host: String,
}

impl HistoryEntry {
    /// Text shown for this entry in the history list: `"{host} - {address}"`.
    pub fn display_text(&self) -> String {
        format!("{}{}{}", self.host, DISPLAY_SEPARATOR, self.address)
    }
}
