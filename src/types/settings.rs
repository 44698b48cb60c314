use serde::{Deserialize, Serialize};

/// Top-level shell settings container.
///
/// Every section falls back to its defaults when omitted from the
/// settings file, so an empty JSON object is a valid configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ShellSettings {
    pub window: WindowSettings,
    pub startup: StartupSettings,
    pub layout: LayoutSettings,
}

/// Native window geometry and title.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub min_width: f64,
    pub min_height: f64,
    /// Enables the web inspector on content tabs.
    pub devtools: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Custom Web Browser".to_string(),
            x: 100.0,
            y: 100.0,
            width: 1200.0,
            height: 800.0,
            min_width: 800.0,
            min_height: 600.0,
            devtools: cfg!(debug_assertions),
        }
    }
}

/// What the window shows when it opens.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StartupSettings {
    pub start_address: String,
    pub start_label: String,
}

impl Default for StartupSettings {
    fn default() -> Self {
        Self {
            start_address: "https://www.google.com".to_string(),
            start_label: "Home".to_string(),
        }
    }
}

/// Fixed sizes of the window chrome, in logical pixels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayoutSettings {
    pub nav_bar_height: f64,
    pub tab_strip_height: f64,
    pub history_panel_width: f64,
    /// Tab titles longer than this many characters are elided.
    pub tab_label_max_chars: usize,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            nav_bar_height: 40.0,
            tab_strip_height: 32.0,
            history_panel_width: 200.0,
            tab_label_max_chars: 20,
        }
    }
}
