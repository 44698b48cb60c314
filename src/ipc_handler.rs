//! Chrome IPC handler.
//!
//! The chrome page (nav bar, tab strip, history panel) posts JSON messages of
//! the form `{"cmd": "...", ...}`. `handle_message` applies them to a
//! `BrowserWindow`, independent of the web view that delivered them, so it
//! can be unit-tested with headless surfaces.

use log::debug;
use serde_json::{json, Value};

use crate::app::BrowserWindow;
use crate::surface::SurfaceFactory;

fn index_param(msg: &Value) -> Result<usize, String> {
    msg.get("index")
        .and_then(|v| v.as_u64())
        .map(|i| i as usize)
        .ok_or_else(|| "missing index".to_string())
}

fn str_param<'a>(msg: &'a Value, key: &str) -> Result<&'a str, String> {
    msg.get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| format!("missing {}", key))
}

/// Dispatch one chrome message to the window.
///
/// Returns `Ok(Value)` describing what happened, or `Err(String)` for
/// malformed messages and failed tab operations. Rejected addresses are not
/// errors: they come back as `{"dispatched": null}`.
pub fn handle_message<F: SurfaceFactory>(
    window: &mut BrowserWindow<F>,
    message: &str,
) -> Result<Value, String> {
    let msg: Value = serde_json::from_str(message).map_err(|e| format!("bad message: {}", e))?;
    let cmd = str_param(&msg, "cmd")?;
    debug!("chrome -> {}", cmd);

    match cmd {
        "ui_ready" => Ok(json!({"ok": true})),

        // ─── Navigation ───
        "back" => Ok(json!({"dispatched": window.go_back()})),
        "forward" => Ok(json!({"dispatched": window.go_forward()})),
        "refresh" => Ok(json!({"dispatched": window.refresh()})),
        "navigate" => {
            let text = str_param(&msg, "url")?;
            Ok(json!({"dispatched": window.submit_address(text)}))
        }

        // ─── Tabs ───
        "new_tab" => {
            let id = window.new_tab().map_err(|e| e.to_string())?;
            Ok(json!({"id": id}))
        }
        "close_tab" => {
            let index = index_param(&msg)?;
            window.close_tab(index).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "select_tab" => {
            let index = index_param(&msg)?;
            window.select_tab(index).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        // ─── History ───
        "toggle_history" => Ok(json!({"visible": window.toggle_history()})),
        "clear_history" => {
            window.clear_history();
            Ok(json!({"ok": true}))
        }
        "open_history" => {
            let text = str_param(&msg, "text")?;
            Ok(json!({"dispatched": window.select_history_entry(text)}))
        }

        other => Err(format!("unknown command: {}", other)),
    }
}
