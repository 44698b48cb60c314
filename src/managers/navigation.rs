//! Navigation controller.
//!
//! Sends back/forward/reload/load commands to the active tab's surface and
//! mirrors the surface's own back/forward capability into button state.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::surface::RenderingSurface;
use crate::types::errors::NavigationError;

/// Turns address-bar text into an address to load.
///
/// Text without an `http://` or `https://` prefix gets `http://` prepended.
/// The result is only checked for well-formedness; it is returned as typed
/// (plus prefix), not re-serialized, so `"example.com"` becomes exactly
/// `"http://example.com"`.
pub fn normalize_address(text: &str) -> Result<String, NavigationError> {
    let address = if text.starts_with("http://") || text.starts_with("https://") {
        text.to_string()
    } else {
        format!("http://{}", text)
    };

    Url::parse(&address).map_err(|e| NavigationError::InvalidAddress {
        input: text.to_string(),
        reason: e.to_string(),
    })?;
    Ok(address)
}

/// Enabled state of the back and forward buttons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavButtons {
    pub back_enabled: bool,
    pub forward_enabled: bool,
}

impl NavButtons {
    /// Reads the capability the surface reports. Never derived elsewhere.
    pub fn from_surface<S: RenderingSurface>(surface: &S) -> Self {
        Self {
            back_enabled: surface.can_go_back(),
            forward_enabled: surface.can_go_forward(),
        }
    }
}

/// Issues navigation commands and tracks button enablement.
#[derive(Debug, Default)]
pub struct NavigationController {
    buttons: NavButtons,
}

impl NavigationController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buttons(&self) -> NavButtons {
        self.buttons
    }

    /// Copies back/forward availability from `surface` into the buttons.
    pub fn refresh_button_states<S: RenderingSurface>(&mut self, surface: &S) {
        self.buttons = NavButtons::from_surface(surface);
    }

    /// Goes back if the surface allows it. Returns whether a command was sent.
    pub fn go_back<S: RenderingSurface>(&mut self, surface: Option<&mut S>) -> bool {
        let Some(surface) = surface else {
            return false;
        };
        if !surface.can_go_back() {
            return false;
        }
        if let Err(e) = surface.back() {
            warn!("back failed: {}", e);
        }
        self.refresh_button_states(surface);
        true
    }

    /// Goes forward if the surface allows it. Returns whether a command was sent.
    pub fn go_forward<S: RenderingSurface>(&mut self, surface: Option<&mut S>) -> bool {
        let Some(surface) = surface else {
            return false;
        };
        if !surface.can_go_forward() {
            return false;
        }
        if let Err(e) = surface.forward() {
            warn!("forward failed: {}", e);
        }
        self.refresh_button_states(surface);
        true
    }

    /// Reloads the surface, if any.
    pub fn refresh<S: RenderingSurface>(&mut self, surface: Option<&mut S>) -> bool {
        let Some(surface) = surface else {
            return false;
        };
        if let Err(e) = surface.reload() {
            warn!("reload failed: {}", e);
        }
        true
    }

    /// Normalizes `text` and loads it in `surface`.
    ///
    /// Returns the dispatched address, or the reason nothing was dispatched.
    pub fn navigate<S: RenderingSurface>(
        &mut self,
        surface: Option<&mut S>,
        text: &str,
    ) -> Result<String, NavigationError> {
        let address = normalize_address(text)?;
        let surface = surface.ok_or(NavigationError::NoActiveTab)?;
        debug!("navigate {}", address);
        if let Err(e) = surface.navigate(&address) {
            warn!("navigation to {} failed: {}", address, e);
        }
        Ok(address)
    }
}
