//! Rendering surface abstraction.
//!
//! A tab never talks to a web engine directly. It holds something that
//! implements [`RenderingSurface`]: the small capability set the shell needs
//! to drive a page (navigate, reload, back/forward and their availability)
//! plus a listener registry through which the surface reports what happened
//! (address changed, title changed, load finished).
//!
//! Listeners run synchronously, on the UI thread, in registration order.

use std::cell::RefCell;

use crate::types::errors::SurfaceError;

pub mod headless;
pub mod session;

/// Notification emitted by a rendering surface.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    /// The surface committed to a new address.
    AddressChanged(String),
    /// The document title changed.
    TitleChanged(String),
    /// A load finished; `ok` is false when the engine reported a failure.
    LoadFinished { ok: bool },
}

/// Callback registered on a surface.
pub type Listener = Box<dyn Fn(&SurfaceEvent)>;

/// Ordered listener registry shared by every surface binding.
#[derive(Default)]
pub struct Listeners {
    slots: RefCell<Vec<Listener>>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a listener. It fires after every listener registered before it.
    pub fn subscribe(&self, listener: Listener) {
        self.slots.borrow_mut().push(listener);
    }

    /// Calls every listener with `event`, in registration order.
    ///
    /// Listeners must not subscribe new listeners from inside the callback.
    pub fn emit(&self, event: &SurfaceEvent) {
        for listener in self.slots.borrow().iter() {
            listener(event);
        }
    }

    pub fn len(&self) -> usize {
        self.slots.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.borrow().is_empty()
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners").field("count", &self.len()).finish()
    }
}

/// Capabilities a concrete web-view binding must provide to back a tab.
pub trait RenderingSurface {
    /// Starts loading `address`.
    fn navigate(&mut self, address: &str) -> Result<(), SurfaceError>;
    fn reload(&mut self) -> Result<(), SurfaceError>;
    fn back(&mut self) -> Result<(), SurfaceError>;
    fn forward(&mut self) -> Result<(), SurfaceError>;
    fn can_go_back(&self) -> bool;
    fn can_go_forward(&self) -> bool;
    /// Address of the entry the surface currently shows.
    fn current_address(&self) -> String;
    /// Registers a listener for this surface's notifications.
    fn subscribe(&self, listener: Listener);
}

/// Creates the surface for each new tab.
pub trait SurfaceFactory {
    type Surface: RenderingSurface;

    /// Returns a fresh surface that has not loaded anything yet.
    fn create(&mut self) -> Result<Self::Surface, SurfaceError>;
}
