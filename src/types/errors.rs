use std::fmt;

// === TabError ===

/// Errors related to tab host operations.
#[derive(Debug, PartialEq)]
pub enum TabError {
    /// The provided tab index is out of bounds.
    InvalidIndex(usize),
    /// The last tab cannot close because its replacement failed to open.
    ReplacementFailed(String),
}

impl fmt::Display for TabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabError::InvalidIndex(index) => write!(f, "Invalid tab index: {}", index),
            TabError::ReplacementFailed(msg) => {
                write!(f, "Cannot close the last tab: {}", msg)
            }
        }
    }
}

impl std::error::Error for TabError {}

// === NavigationError ===

/// Errors raised while turning address-bar text into a navigable address.
#[derive(Debug, PartialEq)]
pub enum NavigationError {
    /// The text could not be parsed as an address.
    InvalidAddress { input: String, reason: String },
    /// There is no tab to navigate.
    NoActiveTab,
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationError::InvalidAddress { input, reason } => {
                write!(f, "Invalid address '{}': {}", input, reason)
            }
            NavigationError::NoActiveTab => write!(f, "No active tab"),
        }
    }
}

impl std::error::Error for NavigationError {}

// === SurfaceError ===

/// Errors reported by a rendering surface binding.
#[derive(Debug)]
pub enum SurfaceError {
    /// The underlying web view could not be created.
    Creation(String),
    /// A command sent to the web view failed.
    Command(String),
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::Creation(msg) => write!(f, "Failed to create web view: {}", msg),
            SurfaceError::Command(msg) => write!(f, "Web view command failed: {}", msg),
        }
    }
}

impl std::error::Error for SurfaceError {}

// === SettingsError ===

/// Errors related to loading shell settings.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading settings.
    IoError(String),
    /// Failed to deserialize settings.
    SerializationError(String),
    /// A value parsed but cannot be used.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}

// === ShellError ===

/// Fatal errors raised while bringing the browser window up.
#[derive(Debug)]
pub enum ShellError {
    /// Settings could not be loaded.
    Settings(SettingsError),
    /// The first tab's surface could not be created.
    Surface(SurfaceError),
    /// The native window could not be created.
    Window(String),
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellError::Settings(e) => write!(f, "Startup failed: {}", e),
            ShellError::Surface(e) => write!(f, "Startup failed: {}", e),
            ShellError::Window(msg) => write!(f, "Failed to create window: {}", msg),
        }
    }
}

impl std::error::Error for ShellError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShellError::Settings(e) => Some(e),
            ShellError::Surface(e) => Some(e),
            ShellError::Window(_) => None,
        }
    }
}

impl From<SettingsError> for ShellError {
    fn from(e: SettingsError) -> Self {
        ShellError::Settings(e)
    }
}

impl From<SurfaceError> for ShellError {
    fn from(e: SurfaceError) -> Self {
        ShellError::Surface(e)
    }
}
