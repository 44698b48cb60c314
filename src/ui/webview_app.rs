//! Native window and event loop using `wry` + `tao`.
//!
//! Architecture:
//! - One chrome WebView spans the whole window and draws the nav bar, tab
//!   strip and history panel from `resources/ui/`.
//! - Each tab is a child WebView placed over the content area; only the
//!   active one is visible.
//! - The chrome page talks to Rust via `window.ipc.postMessage()`; every
//!   message and every surface notification is routed through the event
//!   loop as a `UserEvent`, so all state lives on the UI thread without locks.

use std::rc::Rc;

use log::{debug, info, warn};
use tao::dpi::{LogicalPosition, LogicalSize};
use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder, EventLoopProxy};
use tao::window::{Window, WindowBuilder};
use wry::{WebView, WebViewBuilder};

use super::webview_surface::{WebViewFactory, WebViewSurface};
use crate::app::BrowserWindow;
use crate::ipc_handler::handle_message;
use crate::layout::Rect;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::types::errors::ShellError;
use crate::types::tab::{Tab, NEW_TAB_LABEL};

#[derive(Debug)]
pub enum UserEvent {
    /// JSON message posted by the chrome page.
    Chrome(String),
    /// A tab surface emitted notifications.
    SurfaceChanged,
    /// A page asked for a new window; it opens as a tab instead.
    OpenTab(String),
}

const CHROME_HTML: &str = include_str!("../../resources/ui/chrome.html");
const CHROME_CSS: &str = include_str!("../../resources/ui/chrome.css");
const CHROME_JS: &str = include_str!("../../resources/ui/chrome.js");

fn chrome_page() -> String {
    CHROME_HTML
        .replace("/*CHROME_CSS*/", CHROME_CSS)
        .replace("/*CHROME_JS*/", CHROME_JS)
}

struct Shell {
    window: Rc<Window>,
    chrome: WebView,
    browser: BrowserWindow<WebViewFactory>,
}

impl Shell {
    fn logical_size(&self) -> (f64, f64) {
        let size = self
            .window
            .inner_size()
            .to_logical::<f64>(self.window.scale_factor());
        (size.width, size.height)
    }

    /// Places tab views and pushes the current state to the chrome page.
    fn render(&self) {
        let (width, height) = self.logical_size();
        let layout = self.browser.layout(width, height);

        if let Err(e) = self.chrome.set_bounds(wry::Rect {
            position: wry::dpi::LogicalPosition::new(0.0, 0.0).into(),
            size: wry::dpi::LogicalSize::new(width, height).into(),
        }) {
            warn!("could not resize chrome view: {}", e);
        }

        let active_id = self.browser.active_tab().map(|t| t.id.clone());
        for tab in self.browser.tabs().iter() {
            place_tab(tab, layout.content, active_id.as_deref() == Some(tab.id.as_str()));
        }

        match serde_json::to_string(&self.browser.chrome_state(width, height)) {
            Ok(json) => {
                let script = format!("if(window.__shell_render)__shell_render({})", json);
                if let Err(e) = self.chrome.evaluate_script(&script) {
                    warn!("chrome render failed: {}", e);
                }
            }
            Err(e) => warn!("could not serialize chrome state: {}", e),
        }
    }
}

fn place_tab(tab: &Tab<WebViewSurface>, content: Rect, active: bool) {
    if active {
        if let Err(e) = tab.surface.set_bounds(content) {
            warn!("could not place tab {}: {}", tab.id, e);
        }
    }
    if let Err(e) = tab.surface.set_visible(active) {
        warn!("could not show/hide tab {}: {}", tab.id, e);
    }
}

fn build_chrome(window: &Window, proxy: EventLoopProxy<UserEvent>) -> Result<WebView, ShellError> {
    WebViewBuilder::new()
        .with_html(chrome_page())
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let _ = proxy.send_event(UserEvent::Chrome(msg.body().clone()));
        })
        .with_devtools(cfg!(debug_assertions))
        .build_as_child(window)
        .map_err(|e| ShellError::Window(format!("chrome view: {}", e)))
}

// ─── Main entry point ───

pub fn run() -> Result<(), ShellError> {
    // Child web views are positioned through X11; run under XWayland on Wayland.
    #[cfg(target_os = "linux")]
    if std::env::var_os("GDK_BACKEND").is_none() {
        std::env::set_var("GDK_BACKEND", "x11");
    }

    let mut engine = SettingsEngine::new(None);
    let settings = engine.load()?;

    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let ws = &settings.window;
    let window = WindowBuilder::new()
        .with_title(ws.title.as_str())
        .with_position(LogicalPosition::new(ws.x, ws.y))
        .with_inner_size(LogicalSize::new(ws.width, ws.height))
        .with_min_inner_size(LogicalSize::new(ws.min_width, ws.min_height))
        .build(&event_loop)
        .map_err(|e| ShellError::Window(e.to_string()))?;
    let window = Rc::new(window);

    // Built before any tab so tab views stack above it.
    let chrome = build_chrome(&window, proxy.clone())?;

    let factory = WebViewFactory::new(window.clone(), proxy, settings.window.devtools);
    let browser = BrowserWindow::new(settings, factory)?;
    info!("browser window ready");

    let mut shell = Shell {
        window,
        chrome,
        browser,
    };
    shell.render();

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("closing with {} tab(s) open", shell.browser.tab_count());
                *control_flow = ControlFlow::Exit;
            }

            Event::WindowEvent {
                event: WindowEvent::Resized(_),
                ..
            } => shell.render(),

            Event::UserEvent(user_event) => {
                match user_event {
                    UserEvent::Chrome(message) => {
                        match handle_message(&mut shell.browser, &message) {
                            Ok(result) => debug!("chrome <- {}", result),
                            Err(e) => warn!("chrome message rejected: {}", e),
                        }
                        shell.browser.pump_events();
                    }
                    UserEvent::SurfaceChanged => {
                        if shell.browser.pump_events() == 0 {
                            return;
                        }
                    }
                    UserEvent::OpenTab(url) => {
                        if let Err(e) = shell.browser.add_tab(Some(&url), NEW_TAB_LABEL) {
                            warn!("could not open {} in a new tab: {}", url, e);
                        }
                    }
                }
                shell.render();
            }

            _ => {}
        }
    })
}
