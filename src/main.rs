//! webshell: a minimal tabbed web browser shell.
//!
//! Entry point: opens the browser window. When built without the `gui`
//! feature, runs a console walkthrough over headless surfaces instead.
//! Exits with status 1 if startup fails.

use std::process::ExitCode;

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();
}

#[cfg(feature = "gui")]
fn main() -> ExitCode {
    init_logging();
    match webshell::ui::webview_app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(not(feature = "gui"))]
fn main() -> ExitCode {
    init_logging();

    println!();
    println!("══════════════════════════════════════════════════════");
    println!("  webshell v{} (headless demo)", env!("CARGO_PKG_VERSION"));
    println!("══════════════════════════════════════════════════════");
    println!();

    match demo::run() {
        Ok(()) => {
            println!("  ✓ All components exercised");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(not(feature = "gui"))]
mod demo {
    use webshell::app::BrowserWindow;
    use webshell::managers::history_manager::HistoryManagerTrait;
    use webshell::managers::tab_manager::TabManagerTrait;
    use webshell::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
    use webshell::surface::headless::HeadlessFactory;
    use webshell::types::errors::ShellError;

    type Window = BrowserWindow<HeadlessFactory>;

    fn section(name: &str) {
        println!("──────────────────────────────────────────────────────");
        println!("  {}", name);
        println!("──────────────────────────────────────────────────────");
    }

    pub fn run() -> Result<(), ShellError> {
        section("Settings");
        let mut engine = SettingsEngine::new(None);
        let settings = engine.load()?;
        println!("  Config path: {}", engine.get_config_path().display());
        println!("  Start page:  {}", settings.startup.start_address);
        println!();

        let mut window = BrowserWindow::new(settings, HeadlessFactory::new())?;
        tabs(&mut window)?;
        navigation(&mut window);
        history(&mut window);
        Ok(())
    }

    fn tabs(window: &mut Window) -> Result<(), ShellError> {
        section("Tab Host");
        window.add_tab(Some("https://www.rust-lang.org"), "Rust")?;
        window.new_tab()?;
        window.pump_events();
        for tab in window.tabs().summaries() {
            println!("  [{}] {:<24} {}", if tab.active { "*" } else { " " }, tab.label, tab.address);
        }

        while window.tab_count() > 1 {
            if let Err(e) = window.close_tab(0) {
                eprintln!("  ✗ {}", e);
                break;
            }
        }
        if let Err(e) = window.close_tab(0) {
            eprintln!("  ✗ {}", e);
        }
        window.pump_events();
        println!("  Closed every tab, {} blank tab remains", window.tab_count());
        println!();
        Ok(())
    }

    fn navigation(window: &mut Window) {
        section("Navigation");
        for text in ["example.com", "https://docs.rs/log", "not a url"] {
            match window.submit_address(text) {
                Some(address) => println!("  {:<20} -> {}", text, address),
                None => println!("  {:<20} -> rejected", text),
            }
            window.pump_events();
        }
        window.go_back();
        window.pump_events();
        let buttons = window.buttons();
        println!("  After back: {} (back={}, forward={})",
            window.address_bar(), buttons.back_enabled, buttons.forward_enabled);
        println!();
    }

    fn history(window: &mut Window) {
        section("History");
        window.toggle_history();
        for line in window.history().display_lines() {
            println!("  {}", line);
        }
        window.clear_history();
        println!("  Cleared: {} entries", window.history().len());
        println!();
    }
}
