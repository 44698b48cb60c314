//! `wry` binding of the rendering surface.
//!
//! Each tab is a child WebView of the main window. wry reports page loads
//! and title changes but exposes no session history, so the binding keeps
//! its own [`SessionHistory`] from the addresses the engine commits to and
//! drives back/forward through the page's `history` object.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use tao::event_loop::EventLoopProxy;
use tao::window::Window;
use wry::dpi::{LogicalPosition, LogicalSize};
use wry::{NewWindowResponse, PageLoadEvent, WebView, WebViewBuilder};

use super::webview_app::UserEvent;
use crate::layout::Rect;
use crate::surface::session::SessionHistory;
use crate::surface::{Listener, Listeners, RenderingSurface, SurfaceEvent, SurfaceFactory};
use crate::types::errors::SurfaceError;

fn to_wry_rect(rect: Rect) -> wry::Rect {
    wry::Rect {
        position: LogicalPosition::new(rect.x, rect.y).into(),
        size: LogicalSize::new(rect.width, rect.height).into(),
    }
}

fn command_error(e: wry::Error) -> SurfaceError {
    SurfaceError::Command(e.to_string())
}

/// A tab's WebView.
pub struct WebViewSurface {
    webview: WebView,
    history: Rc<RefCell<SessionHistory>>,
    listeners: Rc<Listeners>,
}

impl WebViewSurface {
    pub fn set_bounds(&self, rect: Rect) -> Result<(), SurfaceError> {
        self.webview.set_bounds(to_wry_rect(rect)).map_err(command_error)
    }

    pub fn set_visible(&self, visible: bool) -> Result<(), SurfaceError> {
        self.webview.set_visible(visible).map_err(command_error)
    }
}

impl RenderingSurface for WebViewSurface {
    fn navigate(&mut self, address: &str) -> Result<(), SurfaceError> {
        self.webview.load_url(address).map_err(command_error)
    }

    fn reload(&mut self) -> Result<(), SurfaceError> {
        self.webview.reload().map_err(command_error)
    }

    fn back(&mut self) -> Result<(), SurfaceError> {
        if !self.history.borrow_mut().request_back() {
            return Ok(());
        }
        self.webview
            .evaluate_script("history.back()")
            .map_err(command_error)
    }

    fn forward(&mut self) -> Result<(), SurfaceError> {
        if !self.history.borrow_mut().request_forward() {
            return Ok(());
        }
        self.webview
            .evaluate_script("history.forward()")
            .map_err(command_error)
    }

    fn can_go_back(&self) -> bool {
        self.history.borrow().can_go_back()
    }

    fn can_go_forward(&self) -> bool {
        self.history.borrow().can_go_forward()
    }

    fn current_address(&self) -> String {
        self.history.borrow().current().unwrap_or_default().to_string()
    }

    fn subscribe(&self, listener: Listener) {
        self.listeners.subscribe(listener);
    }
}

/// Creates tab WebViews as children of the main window.
///
/// Every surface also wakes the event loop whenever it emits, so the
/// window can drain its notifications.
pub struct WebViewFactory {
    window: Rc<Window>,
    proxy: EventLoopProxy<UserEvent>,
    devtools: bool,
}

impl WebViewFactory {
    pub fn new(window: Rc<Window>, proxy: EventLoopProxy<UserEvent>, devtools: bool) -> Self {
        Self {
            window,
            proxy,
            devtools,
        }
    }
}

impl SurfaceFactory for WebViewFactory {
    type Surface = WebViewSurface;

    fn create(&mut self) -> Result<WebViewSurface, SurfaceError> {
        let listeners = Rc::new(Listeners::new());
        let history = Rc::new(RefCell::new(SessionHistory::new()));

        let wake = self.proxy.clone();
        listeners.subscribe(Box::new(move |_| {
            let _ = wake.send_event(UserEvent::SurfaceChanged);
        }));

        // Started commits the address; Finished may carry a redirect target.
        // Commits caused by back()/forward() are absorbed by the history.
        let load_listeners = listeners.clone();
        let load_history = history.clone();
        let last_reported = Rc::new(RefCell::new(String::new()));
        let on_load = move |event: PageLoadEvent, url: String| {
            let changed = *last_reported.borrow() != url;
            match event {
                PageLoadEvent::Started => {
                    load_history.borrow_mut().observe(&url);
                    if changed {
                        *last_reported.borrow_mut() = url.clone();
                        load_listeners.emit(&SurfaceEvent::AddressChanged(url));
                    }
                }
                PageLoadEvent::Finished => {
                    if changed {
                        load_history.borrow_mut().replace_current(&url);
                        *last_reported.borrow_mut() = url.clone();
                        load_listeners.emit(&SurfaceEvent::AddressChanged(url));
                    }
                    load_listeners.emit(&SurfaceEvent::LoadFinished { ok: true });
                }
            }
        };

        let title_listeners = listeners.clone();
        let popup_proxy = self.proxy.clone();

        let webview = WebViewBuilder::new()
            .with_bounds(to_wry_rect(Rect::default()))
            .with_visible(false)
            .with_devtools(self.devtools)
            .with_on_page_load_handler(on_load)
            .with_document_title_changed_handler(move |title| {
                title_listeners.emit(&SurfaceEvent::TitleChanged(title));
            })
            .with_new_window_req_handler(move |url, _features| {
                debug!("popup -> new tab: {}", url);
                let _ = popup_proxy.send_event(UserEvent::OpenTab(url));
                NewWindowResponse::Deny
            })
            .build_as_child(&*self.window)
            .map_err(|e| SurfaceError::Creation(e.to_string()))?;

        Ok(WebViewSurface {
            webview,
            history,
            listeners,
        })
    }
}
