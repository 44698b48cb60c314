//! Unit tests for the chrome message handler.

use serde_json::json;

use webshell::app::BrowserWindow;
use webshell::ipc_handler::handle_message;
use webshell::managers::history_manager::HistoryManagerTrait;
use webshell::managers::tab_manager::TabManagerTrait;
use webshell::surface::headless::HeadlessFactory;
use webshell::types::settings::ShellSettings;

fn window() -> BrowserWindow<HeadlessFactory> {
    let mut settings = ShellSettings::default();
    settings.startup.start_address = "https://start.example/".to_string();
    BrowserWindow::new(settings, HeadlessFactory::new()).expect("headless window should start")
}

#[test]
fn test_ui_ready() {
    let mut w = window();
    assert_eq!(handle_message(&mut w, r#"{"cmd":"ui_ready"}"#).unwrap(), json!({"ok": true}));
}

#[test]
fn test_navigate_message() {
    let mut w = window();

    let result = handle_message(&mut w, r#"{"cmd":"navigate","url":"example.com"}"#).unwrap();
    w.pump_events();

    assert_eq!(result, json!({"dispatched": "http://example.com"}));
    assert_eq!(w.address_bar(), "http://example.com");
}

#[test]
fn test_navigate_malformed_is_not_an_error() {
    let mut w = window();
    let result = handle_message(&mut w, r#"{"cmd":"navigate","url":"not a url"}"#).unwrap();
    assert_eq!(result, json!({"dispatched": null}));
}

#[test]
fn test_back_without_history() {
    let mut w = window();
    let result = handle_message(&mut w, r#"{"cmd":"back"}"#).unwrap();
    assert_eq!(result, json!({"dispatched": false}));
}

#[test]
fn test_refresh_message() {
    let mut w = window();
    let result = handle_message(&mut w, r#"{"cmd":"refresh"}"#).unwrap();
    assert_eq!(result, json!({"dispatched": true}));
}

#[test]
fn test_tab_messages() {
    let mut w = window();

    let created = handle_message(&mut w, r#"{"cmd":"new_tab"}"#).unwrap();
    assert!(created["id"].is_string());
    assert_eq!(w.tab_count(), 2);

    handle_message(&mut w, r#"{"cmd":"select_tab","index":0}"#).unwrap();
    assert_eq!(w.tabs().active_index(), Some(0));

    handle_message(&mut w, r#"{"cmd":"close_tab","index":1}"#).unwrap();
    assert_eq!(w.tab_count(), 1);
}

#[test]
fn test_close_tab_bad_index() {
    let mut w = window();
    let err = handle_message(&mut w, r#"{"cmd":"close_tab","index":7}"#).unwrap_err();
    assert!(err.contains("Invalid tab index"), "got: {}", err);
}

#[test]
fn test_history_messages() {
    let mut w = window();

    assert_eq!(
        handle_message(&mut w, r#"{"cmd":"toggle_history"}"#).unwrap(),
        json!({"visible": true})
    );

    let open = json!({"cmd": "open_history", "text": "start.example - https://start.example/"});
    let result = handle_message(&mut w, &open.to_string()).unwrap();
    assert_eq!(result, json!({"dispatched": "https://start.example/"}));

    handle_message(&mut w, r#"{"cmd":"clear_history"}"#).unwrap();
    w.pump_events();
    assert!(w.history().is_empty());
}

#[test]
fn test_missing_params() {
    let mut w = window();
    assert_eq!(
        handle_message(&mut w, r#"{"cmd":"navigate"}"#).unwrap_err(),
        "missing url"
    );
    assert_eq!(
        handle_message(&mut w, r#"{"cmd":"select_tab"}"#).unwrap_err(),
        "missing index"
    );
    assert_eq!(
        handle_message(&mut w, r#"{"cmd":"open_history"}"#).unwrap_err(),
        "missing text"
    );
}

#[test]
fn test_unknown_command() {
    let mut w = window();
    assert_eq!(
        handle_message(&mut w, r#"{"cmd":"teleport"}"#).unwrap_err(),
        "unknown command: teleport"
    );
}

#[test]
fn test_bad_json() {
    let mut w = window();
    let err = handle_message(&mut w, "{not json").unwrap_err();
    assert!(err.starts_with("bad message:"));
}
