//! webshell UI layer.
//!
//! Uses `wry` for the web views and `tao` for the native window:
//! - Windows: WebView2
//! - Linux: WebKitGTK
//! - macOS: WKWebView
//!
//! The window chrome (nav bar, tab strip, history panel) is itself an
//! HTML page; each browser tab is a separate child web view.

pub mod webview_app;
pub mod webview_surface;
