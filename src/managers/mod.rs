// webshell state managers
// Managers hold the window's state: tabs, navigation buttons, history.

pub mod history_manager;
pub mod navigation;
pub mod tab_manager;
