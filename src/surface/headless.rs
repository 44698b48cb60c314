//! Headless rendering surface.
//!
//! Completes every command instantly: navigating reports the new address,
//! a title derived from its host, and a finished load to the listeners
//! before returning. Used by the console demo and by the tests to drive
//! the window shell without a display.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use url::Url;

use super::session::SessionHistory;
use super::{Listener, Listeners, RenderingSurface, SurfaceEvent, SurfaceFactory};
use crate::types::errors::SurfaceError;

/// A command received by a [`HeadlessSurface`], kept for inspection.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCommand {
    Navigate(String),
    Reload,
    Back,
    Forward,
}

/// Surface that "loads" pages without an engine.
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    history: SessionHistory,
    listeners: Listeners,
    commands: Vec<SurfaceCommand>,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every command this surface received, oldest first.
    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.commands
    }

    /// Addresses passed to `navigate`, oldest first.
    pub fn navigations(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                SurfaceCommand::Navigate(address) => Some(address.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Title a real page at `address` would plausibly carry.
    fn title_for(address: &str) -> String {
        Url::parse(address)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .unwrap_or_else(|| address.to_string())
    }

    fn report_current(&self) {
        let address = self.current_address();
        self.listeners
            .emit(&SurfaceEvent::AddressChanged(address.clone()));
        self.listeners
            .emit(&SurfaceEvent::TitleChanged(Self::title_for(&address)));
        self.listeners.emit(&SurfaceEvent::LoadFinished { ok: true });
    }
}

impl RenderingSurface for HeadlessSurface {
    fn navigate(&mut self, address: &str) -> Result<(), SurfaceError> {
        debug!("headless navigate {}", address);
        self.commands.push(SurfaceCommand::Navigate(address.to_string()));
        self.history.push(address);
        self.report_current();
        Ok(())
    }

    fn reload(&mut self) -> Result<(), SurfaceError> {
        self.commands.push(SurfaceCommand::Reload);
        self.listeners.emit(&SurfaceEvent::LoadFinished { ok: true });
        Ok(())
    }

    fn back(&mut self) -> Result<(), SurfaceError> {
        self.commands.push(SurfaceCommand::Back);
        if self.history.go_back().is_some() {
            self.report_current();
        }
        Ok(())
    }

    fn forward(&mut self) -> Result<(), SurfaceError> {
        self.commands.push(SurfaceCommand::Forward);
        if self.history.go_forward().is_some() {
            self.report_current();
        }
        Ok(())
    }

    fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    fn can_go_forward(&self) -> bool {
        self.history.can_go_forward()
    }

    fn current_address(&self) -> String {
        self.history.current().unwrap_or_default().to_string()
    }

    fn subscribe(&self, listener: Listener) {
        self.listeners.subscribe(listener);
    }
}

/// Factory handing out [`HeadlessSurface`]s.
///
/// `fail_after(n)` makes every creation after the first `n` fail, which
/// exercises the startup error path.
#[derive(Debug, Default, Clone)]
pub struct HeadlessFactory {
    created: Rc<RefCell<usize>>,
    limit: Option<usize>,
}

impl HeadlessFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_after(limit: usize) -> Self {
        Self {
            created: Rc::default(),
            limit: Some(limit),
        }
    }

    /// Number of surfaces created so far.
    pub fn created(&self) -> usize {
        *self.created.borrow()
    }
}

impl SurfaceFactory for HeadlessFactory {
    type Surface = HeadlessSurface;

    fn create(&mut self) -> Result<HeadlessSurface, SurfaceError> {
        let mut created = self.created.borrow_mut();
        if self.limit.is_some_and(|limit| *created >= limit) {
            return Err(SurfaceError::Creation(
                "headless surface limit reached".to_string(),
            ));
        }
        *created += 1;
        Ok(HeadlessSurface::new())
    }
}
