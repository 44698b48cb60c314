//! Window layout.
//!
//! ```text
//! +--------------------------------------------+
//! | nav bar (fixed height)                     |
//! +-----------+--------------------------------+
//! | history   | tab strip                      |
//! | panel     +--------------------------------+
//! | (fixed    | content (expands)              |
//! |  width,   |                                |
//! |  hideable)|                                |
//! +-----------+--------------------------------+
//! ```

use serde::{Deserialize, Serialize};

use crate::types::settings::LayoutSettings;

/// Axis-aligned rectangle in logical pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }
}

/// Regions of the browser window for a given window size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShellLayout {
    pub nav_bar: Rect,
    /// `None` while the history panel is hidden.
    pub history_panel: Option<Rect>,
    pub tab_strip: Rect,
    /// Where the active tab's web view goes.
    pub content: Rect,
}

impl ShellLayout {
    pub fn compute(
        width: f64,
        height: f64,
        history_visible: bool,
        settings: &LayoutSettings,
    ) -> Self {
        let nav_height = settings.nav_bar_height.min(height);
        let body_height = height - nav_height;

        let panel_width = if history_visible {
            settings.history_panel_width.min(width)
        } else {
            0.0
        };
        let history_panel =
            history_visible.then(|| Rect::new(0.0, nav_height, panel_width, body_height));

        let tabs_width = width - panel_width;
        let strip_height = settings.tab_strip_height.min(body_height);

        Self {
            nav_bar: Rect::new(0.0, 0.0, width, nav_height),
            history_panel,
            tab_strip: Rect::new(panel_width, nav_height, tabs_width, strip_height),
            content: Rect::new(
                panel_width,
                nav_height + strip_height,
                tabs_width,
                body_height - strip_height,
            ),
        }
    }
}
