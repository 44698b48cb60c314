//! Browser window core for webshell.
//!
//! `BrowserWindow` composes the tab host, navigation controller, address bar
//! and history log, and keeps them in step with what the tabs' surfaces
//! report. It knows nothing about the native window: the `ui` layer (or a
//! test) feeds it user actions and drains surface notifications through
//! [`BrowserWindow::pump_events`].

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::layout::ShellLayout;
use crate::managers::history_manager::{address_from_display, HistoryLog, HistoryManagerTrait};
use crate::managers::navigation::{NavButtons, NavigationController};
use crate::managers::tab_manager::{TabManager, TabManagerTrait};
use crate::surface::{RenderingSurface, SurfaceEvent, SurfaceFactory};
use crate::types::errors::{ShellError, SurfaceError, TabError};
use crate::types::settings::ShellSettings;
use crate::types::tab::{truncate_label, Tab, TabSummary, BLANK_ADDRESS, NEW_TAB_LABEL};

/// Notifications waiting to be applied, tagged with the emitting tab's ID.
type Inbox = Rc<RefCell<VecDeque<(String, SurfaceEvent)>>>;

/// Everything the chrome page needs to draw itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChromeState {
    pub tabs: Vec<TabSummary>,
    pub address: String,
    pub buttons: NavButtons,
    pub history_visible: bool,
    pub history: Vec<String>,
    pub layout: ShellLayout,
}

/// The browser window's state, generic over how tab surfaces are made.
pub struct BrowserWindow<F: SurfaceFactory> {
    settings: ShellSettings,
    factory: F,
    tabs: TabManager<F::Surface>,
    navigation: NavigationController,
    history: HistoryLog,
    history_visible: bool,
    address_bar: String,
    inbox: Inbox,
}

impl<F: SurfaceFactory> BrowserWindow<F> {
    /// Creates the window with one tab showing the configured start address.
    pub fn new(settings: ShellSettings, factory: F) -> Result<Self, ShellError> {
        let mut window = Self {
            settings,
            factory,
            tabs: TabManager::new(),
            navigation: NavigationController::new(),
            history: HistoryLog::new(),
            history_visible: false,
            address_bar: String::new(),
            inbox: Rc::default(),
        };

        let start = window.settings.startup.clone();
        window.add_tab(Some(&start.start_address), &start.start_label)?;
        window.pump_events();
        Ok(window)
    }

    // ─── Tab host ───

    /// Opens a tab loading `address` (or a blank page) and makes it active.
    pub fn add_tab(&mut self, address: Option<&str>, label: &str) -> Result<String, SurfaceError> {
        let surface = self.factory.create()?;
        let address = address.unwrap_or(BLANK_ADDRESS);

        let id = self.tabs.add_tab(surface, label, "");
        if let Some(tab) = self.tabs.get_active_tab_mut() {
            let inbox = self.inbox.clone();
            let tab_id = id.clone();
            tab.surface.subscribe(Box::new(move |event| {
                inbox.borrow_mut().push_back((tab_id.clone(), event.clone()));
            }));
            if let Err(e) = tab.surface.navigate(address) {
                warn!("new tab could not load {}: {}", address, e);
            }
        }

        self.sync_active_tab();
        Ok(id)
    }

    /// Opens a blank tab labelled "New Tab".
    pub fn new_tab(&mut self) -> Result<String, SurfaceError> {
        self.add_tab(None, NEW_TAB_LABEL)
    }

    /// Closes the tab at `index`.
    ///
    /// Closing the only tab first opens a blank replacement, so the window
    /// never runs out of tabs.
    pub fn close_tab(&mut self, index: usize) -> Result<(), TabError> {
        if index >= self.tabs.tab_count() {
            return Err(TabError::InvalidIndex(index));
        }
        if self.tabs.tab_count() == 1 {
            self.new_tab()
                .map_err(|e| TabError::ReplacementFailed(e.to_string()))?;
        }

        let closed = self.tabs.remove_tab(index)?;
        debug!("dropping surface of tab {}", closed.id);
        drop(closed);

        self.sync_active_tab();
        Ok(())
    }

    pub fn select_tab(&mut self, index: usize) -> Result<(), TabError> {
        self.tabs.select_tab(index)?;
        self.sync_active_tab();
        Ok(())
    }

    pub fn active_tab(&self) -> Option<&Tab<F::Surface>> {
        self.tabs.get_active_tab()
    }

    pub fn tabs(&self) -> &TabManager<F::Surface> {
        &self.tabs
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.tab_count()
    }

    /// Points the address bar and buttons at the newly active tab.
    fn sync_active_tab(&mut self) {
        if let Some(tab) = self.tabs.get_active_tab() {
            self.address_bar = tab.address.clone();
            self.navigation.refresh_button_states(&tab.surface);
        }
    }

    // ─── Navigation ───

    pub fn go_back(&mut self) -> bool {
        let surface = self.tabs.get_active_tab_mut().map(|t| &mut t.surface);
        self.navigation.go_back(surface)
    }

    pub fn go_forward(&mut self) -> bool {
        let surface = self.tabs.get_active_tab_mut().map(|t| &mut t.surface);
        self.navigation.go_forward(surface)
    }

    pub fn refresh(&mut self) -> bool {
        let surface = self.tabs.get_active_tab_mut().map(|t| &mut t.surface);
        self.navigation.refresh(surface)
    }

    /// Loads `text` in the active tab after normalizing it.
    ///
    /// Malformed addresses are logged and dropped; `None` means nothing
    /// was dispatched.
    pub fn navigate(&mut self, text: &str) -> Option<String> {
        let surface = self.tabs.get_active_tab_mut().map(|t| &mut t.surface);
        match self.navigation.navigate(surface, text) {
            Ok(address) => Some(address),
            Err(e) => {
                warn!("address not submitted: {}", e);
                None
            }
        }
    }

    pub fn buttons(&self) -> NavButtons {
        self.navigation.buttons()
    }

    // ─── Address bar ───

    pub fn address_bar(&self) -> &str {
        &self.address_bar
    }

    /// Enter pressed in the address bar with `text` in it.
    pub fn submit_address(&mut self, text: &str) -> Option<String> {
        self.address_bar = text.to_string();
        self.navigate(text)
    }

    // ─── History ───

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Re-opens a history list line in the active tab.
    /// The recovered address is loaded as-is, without normalization.
    pub fn select_history_entry(&mut self, display_text: &str) -> Option<String> {
        let address = address_from_display(display_text).to_string();
        let tab = self.tabs.get_active_tab_mut()?;
        if let Err(e) = tab.surface.navigate(&address) {
            warn!("could not reopen {}: {}", address, e);
        }
        Some(address)
    }

    /// Empties the history log. Notifications already queued are applied
    /// first so that no earlier address reappears after the clear.
    pub fn clear_history(&mut self) {
        self.pump_events();
        info!("clearing {} history entries", self.history.len());
        self.history.clear();
    }

    /// Shows or hides the history panel; returns the new visibility.
    pub fn toggle_history(&mut self) -> bool {
        self.history_visible = !self.history_visible;
        self.history_visible
    }

    pub fn history_visible(&self) -> bool {
        self.history_visible
    }

    // ─── Surface notifications ───

    /// Applies every queued surface notification. Returns how many ran.
    pub fn pump_events(&mut self) -> usize {
        let mut handled = 0;
        loop {
            let next = self.inbox.borrow_mut().pop_front();
            let Some((tab_id, event)) = next else {
                break;
            };
            self.handle_surface_event(&tab_id, &event);
            handled += 1;
        }
        handled
    }

    /// Reacts to one notification from the surface of tab `tab_id`.
    ///
    /// Address changes update the tab and are logged to history; they reach
    /// the address bar only when the tab is the active one. Load completion
    /// on the active tab re-reads the back/forward capability.
    pub fn handle_surface_event(&mut self, tab_id: &str, event: &SurfaceEvent) {
        let Some(index) = self.tabs.index_of(tab_id) else {
            debug!("ignoring {:?} from closed tab {}", event, tab_id);
            return;
        };
        let is_active = self.tabs.active_index() == Some(index);
        let max_chars = self.settings.layout.tab_label_max_chars;
        let Some(tab) = self.tabs.get_tab_mut(index) else {
            return;
        };

        match event {
            SurfaceEvent::AddressChanged(address) => {
                tab.address = address.clone();
                if is_active {
                    self.address_bar = address.clone();
                }
                if self.history.record(address) {
                    debug!("history += {}", address);
                }
            }
            SurfaceEvent::TitleChanged(title) => {
                tab.label = truncate_label(title, max_chars);
            }
            SurfaceEvent::LoadFinished { ok } => {
                if !ok {
                    debug!("tab {} finished loading with an error", tab_id);
                }
                if is_active {
                    self.navigation.refresh_button_states(&tab.surface);
                }
            }
        }
    }

    // ─── Window shell ───

    pub fn settings(&self) -> &ShellSettings {
        &self.settings
    }

    pub fn layout(&self, width: f64, height: f64) -> ShellLayout {
        ShellLayout::compute(width, height, self.history_visible, &self.settings.layout)
    }

    /// Snapshot for the chrome page at the given window size.
    pub fn chrome_state(&self, width: f64, height: f64) -> ChromeState {
        ChromeState {
            tabs: self.tabs.summaries(),
            address: self.address_bar.clone(),
            buttons: self.navigation.buttons(),
            history_visible: self.history_visible,
            history: self.history.display_lines(),
            layout: self.layout(width, height),
        }
    }
}
