// webshell shared type definitions
// Each submodule defines types used across the shell.

pub mod errors;
pub mod history;
pub mod settings;
pub mod tab;
