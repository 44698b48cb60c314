//! Unit tests for the BrowserWindow over headless surfaces.
//!
//! Headless surfaces report address, title and load completion as soon as
//! they are told to navigate, so every test drains the notifications with
//! `pump_events` before looking at the window.

use webshell::app::BrowserWindow;
use webshell::managers::history_manager::HistoryManagerTrait;
use webshell::managers::navigation::NavButtons;
use webshell::managers::tab_manager::TabManagerTrait;
use webshell::surface::headless::{HeadlessFactory, SurfaceCommand};
use webshell::surface::SurfaceEvent;
use webshell::types::errors::{ShellError, TabError};
use webshell::types::settings::ShellSettings;

type Window = BrowserWindow<HeadlessFactory>;

fn settings_starting_at(address: &str) -> ShellSettings {
    let mut settings = ShellSettings::default();
    settings.startup.start_address = address.to_string();
    settings
}

fn window() -> Window {
    BrowserWindow::new(settings_starting_at("https://start.example/"), HeadlessFactory::new())
        .expect("headless window should start")
}

fn active_id(window: &Window) -> String {
    window.active_tab().unwrap().id.clone()
}

// ─── Startup ───

#[test]
fn test_starts_with_one_tab_at_start_address() {
    let window = window();

    assert_eq!(window.tab_count(), 1);
    let tab = window.active_tab().unwrap();
    assert_eq!(tab.address, "https://start.example/");
    assert_eq!(tab.surface.navigations(), vec!["https://start.example/"]);
    assert_eq!(window.address_bar(), "https://start.example/");
    assert!(!window.history_visible());
}

#[test]
fn test_startup_surface_failure_is_reported() {
    let result = BrowserWindow::new(ShellSettings::default(), HeadlessFactory::fail_after(0));
    match result {
        Err(ShellError::Surface(_)) => {}
        Err(other) => panic!("expected a surface error, got {}", other),
        Ok(_) => panic!("window started without a surface"),
    }
}

// ─── Tabs ───

#[test]
fn test_new_tab_is_blank_and_active() {
    let mut window = window();

    window.new_tab().unwrap();
    window.pump_events();

    assert_eq!(window.tab_count(), 2);
    assert_eq!(window.tabs().active_index(), Some(1));
    assert_eq!(window.active_tab().unwrap().address, "about:blank");
    assert_eq!(window.address_bar(), "about:blank");
}

#[test]
fn test_closing_only_tab_leaves_one_blank_tab() {
    let factory = HeadlessFactory::new();
    let mut window =
        BrowserWindow::new(settings_starting_at("https://start.example/"), factory.clone())
            .unwrap();
    let original = active_id(&window);

    window.close_tab(0).unwrap();
    window.pump_events();

    assert_eq!(window.tab_count(), 1);
    assert_ne!(active_id(&window), original);
    assert_eq!(window.active_tab().unwrap().address, "about:blank");
    assert_eq!(factory.created(), 2);
}

#[test]
fn test_closing_only_tab_fails_when_no_replacement() {
    let mut window =
        BrowserWindow::new(ShellSettings::default(), HeadlessFactory::fail_after(1)).unwrap();

    let err = window.close_tab(0).unwrap_err();

    assert!(matches!(err, TabError::ReplacementFailed(_)));
    assert_eq!(window.tab_count(), 1);
}

#[test]
fn test_close_out_of_range_is_rejected() {
    let mut window = window();
    assert_eq!(window.close_tab(3).unwrap_err(), TabError::InvalidIndex(3));
    assert_eq!(window.select_tab(1).unwrap_err(), TabError::InvalidIndex(1));
    assert_eq!(window.tab_count(), 1);
}

#[test]
fn test_closing_active_tab_syncs_address_bar() {
    let mut window = window();
    window.add_tab(Some("https://second.example/"), "Second").unwrap();
    window.pump_events();
    assert_eq!(window.address_bar(), "https://second.example/");

    window.close_tab(1).unwrap();

    assert_eq!(window.address_bar(), "https://start.example/");
}

#[test]
fn test_select_tab_syncs_address_bar_and_buttons() {
    let mut window = window();
    window.submit_address("https://next.example/");
    window.pump_events();
    window.new_tab().unwrap();
    window.pump_events();
    assert_eq!(window.buttons(), NavButtons::default());

    window.select_tab(0).unwrap();

    assert_eq!(window.address_bar(), "https://next.example/");
    assert!(window.buttons().back_enabled);
}

#[test]
fn test_title_sets_truncated_label() {
    let mut window = window();
    let id = active_id(&window);

    window.handle_surface_event(
        &id,
        &SurfaceEvent::TitleChanged("A page title that is far too long".to_string()),
    );

    assert_eq!(window.active_tab().unwrap().label, "A page title that is...");
}

#[test]
fn test_headless_title_becomes_label() {
    let window = window();
    assert_eq!(window.active_tab().unwrap().label, "start.example");
}

// ─── Address bar ───

#[test]
fn test_background_tab_does_not_touch_address_bar() {
    let mut window = window();
    let background = active_id(&window);
    window.new_tab().unwrap();
    window.pump_events();

    window.handle_surface_event(
        &background,
        &SurfaceEvent::AddressChanged("https://elsewhere.example/".to_string()),
    );

    assert_eq!(window.address_bar(), "about:blank");
    assert_eq!(window.tabs().get_tab(0).unwrap().address, "https://elsewhere.example/");
    assert!(window.history().contains("https://elsewhere.example/"));
}

#[test]
fn test_events_from_closed_tab_are_ignored() {
    let mut window = window();
    window.new_tab().unwrap();
    window.pump_events();
    let closed = active_id(&window);
    window.close_tab(1).unwrap();
    let history_len = window.history().len();

    window.handle_surface_event(
        &closed,
        &SurfaceEvent::AddressChanged("https://ghost.example/".to_string()),
    );

    assert_eq!(window.address_bar(), "https://start.example/");
    assert_eq!(window.history().len(), history_len);
}

#[test]
fn test_submit_address_normalizes_and_loads() {
    let mut window = window();

    let dispatched = window.submit_address("example.com");
    window.pump_events();

    assert_eq!(dispatched.as_deref(), Some("http://example.com"));
    assert_eq!(window.address_bar(), "http://example.com");
    assert_eq!(
        window.active_tab().unwrap().surface.navigations().last(),
        Some(&"http://example.com")
    );
}

#[test]
fn test_submit_malformed_address_dispatches_nothing() {
    let mut window = window();

    assert_eq!(window.submit_address("not a url"), None);
    window.pump_events();

    assert_eq!(window.active_tab().unwrap().surface.navigations().len(), 1);
    assert_eq!(window.address_bar(), "not a url");
}

// ─── Navigation ───

#[test]
fn test_back_forward_refresh() {
    let mut window = window();
    assert!(!window.go_back(), "nothing to go back to at startup");

    window.submit_address("https://second.example/");
    window.pump_events();
    assert_eq!(window.buttons(), NavButtons { back_enabled: true, forward_enabled: false });

    assert!(window.go_back());
    window.pump_events();
    assert_eq!(window.address_bar(), "https://start.example/");
    assert_eq!(window.buttons(), NavButtons { back_enabled: false, forward_enabled: true });

    assert!(window.go_forward());
    window.pump_events();
    assert_eq!(window.address_bar(), "https://second.example/");

    assert!(window.refresh());
    assert_eq!(
        window.active_tab().unwrap().surface.commands().last(),
        Some(&SurfaceCommand::Reload)
    );
}

#[test]
fn test_background_load_does_not_touch_buttons() {
    let mut window = window();
    let background = active_id(&window);
    window.new_tab().unwrap();
    window.pump_events();
    window.submit_address("https://next.example/");
    window.pump_events();
    let buttons = window.buttons();
    assert!(buttons.back_enabled);

    window.handle_surface_event(&background, &SurfaceEvent::LoadFinished { ok: true });

    assert_eq!(window.buttons(), buttons);
}

// ─── History ───

#[test]
fn test_history_is_deduplicated() {
    let mut window = window();
    window.submit_address("https://a.example/");
    window.pump_events();
    window.submit_address("https://start.example/");
    window.pump_events();

    assert_eq!(
        window.history().display_lines(),
        vec![
            "start.example - https://start.example/".to_string(),
            "a.example - https://a.example/".to_string(),
        ]
    );
}

#[test]
fn test_history_entry_reopens_in_active_tab() {
    let mut window = window();
    window.submit_address("https://a.example/page");
    window.pump_events();

    let line = window.history().display_lines()[0].clone();
    let reopened = window.select_history_entry(&line);
    window.pump_events();

    assert_eq!(reopened.as_deref(), Some("https://start.example/"));
    assert_eq!(window.address_bar(), "https://start.example/");
}

#[test]
fn test_toggle_and_clear_history() {
    let mut window = window();

    assert!(window.toggle_history());
    assert!(window.history_visible());
    assert!(window.layout(1200.0, 800.0).history_panel.is_some());

    window.clear_history();
    assert!(window.history().is_empty());
    assert!(window.history_visible(), "clearing keeps the panel open");

    assert!(!window.toggle_history());
    assert!(window.layout(1200.0, 800.0).history_panel.is_none());
}

#[test]
fn test_clear_history_discards_queued_addresses() {
    let mut window = window();
    window.submit_address("https://queued.example/");

    window.clear_history();
    window.pump_events();

    assert!(window.history().is_empty());
    assert_eq!(window.address_bar(), "https://queued.example/");
}

#[test]
fn test_chrome_state_snapshot() {
    let mut window = window();
    window.new_tab().unwrap();
    window.pump_events();

    let state = window.chrome_state(1200.0, 800.0);

    assert_eq!(state.tabs.len(), 2);
    assert!(state.tabs[1].active);
    assert_eq!(state.address, "about:blank");
    assert_eq!(state.history.len(), 2);
    assert!(!state.history_visible);
    assert_eq!(state.layout.content.width, 1200.0);
}
