// webshell Settings Engine
// Reads the optional shell settings file. The shell never writes it; a
// missing file means built-in defaults.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::platform;
use crate::types::errors::SettingsError;
use crate::types::settings::ShellSettings;

/// Environment variable naming an explicit settings file.
pub const CONFIG_ENV_VAR: &str = "WEBSHELL_CONFIG";

/// Trait defining the settings engine interface.
pub trait SettingsEngineTrait {
    fn load(&mut self) -> Result<ShellSettings, SettingsError>;
    fn get_settings(&self) -> &ShellSettings;
    fn get_config_path(&self) -> &Path;
}

/// Read-only settings engine backed by a JSON file.
pub struct SettingsEngine {
    config_path: PathBuf,
    settings: ShellSettings,
}

impl SettingsEngine {
    /// Creates a new SettingsEngine.
    ///
    /// If `path_override` is `Some`, uses that path for the config file.
    /// Otherwise uses `$WEBSHELL_CONFIG`, then the platform config directory
    /// with `settings.json`.
    pub fn new(path_override: Option<PathBuf>) -> Self {
        let config_path = path_override
            .or_else(|| env::var_os(CONFIG_ENV_VAR).map(PathBuf::from))
            .unwrap_or_else(|| platform::get_config_dir().join("settings.json"));

        Self {
            config_path,
            settings: ShellSettings::default(),
        }
    }

    fn validate(settings: &ShellSettings) -> Result<(), SettingsError> {
        let window = &settings.window;
        if window.width <= 0.0 || window.height <= 0.0 {
            return Err(SettingsError::InvalidValue(format!(
                "window size must be positive, got {}x{}",
                window.width, window.height
            )));
        }
        if window.min_width > window.width || window.min_height > window.height {
            return Err(SettingsError::InvalidValue(
                "minimum window size exceeds window size".to_string(),
            ));
        }
        if settings.layout.tab_label_max_chars == 0 {
            return Err(SettingsError::InvalidValue(
                "tab_label_max_chars must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl SettingsEngineTrait for SettingsEngine {
    /// Loads settings from the JSON config file.
    ///
    /// If the file does not exist, returns default settings.
    /// If the file exists but is malformed, returns a serialization error.
    fn load(&mut self) -> Result<ShellSettings, SettingsError> {
        let path = self.config_path.as_path();

        if !path.exists() {
            debug!("no settings file at {}, using defaults", path.display());
            self.settings = ShellSettings::default();
            return Ok(self.settings.clone());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| SettingsError::IoError(format!("Failed to read config file: {}", e)))?;

        let settings: ShellSettings = serde_json::from_str(&content).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to parse config file: {}", e))
        })?;
        Self::validate(&settings)?;

        info!("loaded settings from {}", path.display());
        self.settings = settings;
        Ok(self.settings.clone())
    }

    /// Returns a reference to the current in-memory settings.
    fn get_settings(&self) -> &ShellSettings {
        &self.settings
    }

    fn get_config_path(&self) -> &Path {
        &self.config_path
    }
}
