// webshell platform paths
// Only the configuration directory is needed: the shell keeps no data or
// cache of its own (the web engine manages its own storage).

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "webshell";

/// Returns the platform-specific configuration directory for webshell.
///
/// - **Linux**: `$XDG_CONFIG_HOME/webshell`, else `~/.config/webshell`
/// - **macOS**: `~/Library/Application Support/webshell`
/// - **Windows**: `%APPDATA%/webshell`
#[cfg(target_os = "linux")]
pub fn get_config_dir() -> PathBuf {
    if let Some(xdg) = env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
        PathBuf::from(xdg).join(APP_DIR)
    } else {
        home_dir().join(".config").join(APP_DIR)
    }
}

#[cfg(target_os = "macos")]
pub fn get_config_dir() -> PathBuf {
    home_dir()
        .join("Library")
        .join("Application Support")
        .join(APP_DIR)
}

#[cfg(target_os = "windows")]
pub fn get_config_dir() -> PathBuf {
    let appdata = env::var("APPDATA")
        .unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join(APP_DIR)
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
pub fn get_config_dir() -> PathBuf {
    home_dir().join(".config").join(APP_DIR)
}

#[cfg(not(target_os = "windows"))]
fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}
