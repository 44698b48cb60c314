//! webshell: a minimal tabbed web browser shell over native WebViews.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod ipc_handler;
pub mod layout;
pub mod managers;
pub mod platform;
pub mod services;
pub mod surface;
pub mod types;

#[cfg(feature = "gui")]
pub mod ui;
