use serde::{Deserialize, Serialize};

/// Label given to tabs opened without an explicit one.
pub const NEW_TAB_LABEL: &str = "New Tab";

/// Address loaded by tabs opened without an explicit one.
pub const BLANK_ADDRESS: &str = "about:blank";

/// A browser tab: one rendering surface plus what the shell displays for it.
#[derive(Debug)]
pub struct Tab<S> {
    pub id: String,
    /// Tab strip text, already truncated.
    pub label: String,
    /// Last address the surface reported for this tab.
    pub address: String,
    pub surface: S,
}

/// Serializable view of a tab for the chrome page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TabSummary {
    pub id: String,
    pub label: String,
    pub address: String,
    pub active: bool,
}

/// Shortens a page title for the tab strip.
///
/// Titles longer than `max_chars` characters keep their first `max_chars`
/// characters followed by `"..."`.
pub fn truncate_label(title: &str, max_chars: usize) -> String {
    if title.chars().count() > max_chars {
        let mut label: String = title.chars().take(max_chars).collect();
        label.push_str("...");
        label
    } else {
        title.to_string()
    }
}
