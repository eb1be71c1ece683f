//! Settings persistence.
//!
//! Settings live in one JSON file under the platform config directory. Every
//! change is addressed by a [`SettingKey`], checked against the whole
//! [`ShellSettings`] before it is kept, and left pending until the app hands
//! it to the controller via [`SettingsEngineTrait::take_changed`].

use std::fs;
use std::path::Path;

use crate::platform;
use crate::types::errors::SettingsError;
use crate::types::settings::{SettingKey, ShellSettings};

/// Trait defining the settings engine interface.
pub trait SettingsEngineTrait {
    fn load(&mut self) -> Result<ShellSettings, SettingsError>;
    fn save(&self) -> Result<(), SettingsError>;
    fn get_settings(&self) -> &ShellSettings;
    fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError>;
    fn reset(&mut self) -> Result<(), SettingsError>;
    /// Settings changed since the last call, if any.
    fn take_changed(&mut self) -> Option<ShellSettings>;
    fn get_config_path(&self) -> &str;
}

pub struct SettingsEngine {
    config_path: String,
    settings: ShellSettings,
    changed: bool,
}

impl SettingsEngine {
    /// Uses `path_override` when given, otherwise `settings.json` in the
    /// platform config directory.
    pub fn new(path_override: Option<String>) -> Self {
        let config_path = path_override.unwrap_or_else(|| {
            platform::get_config_dir()
                .join("settings.json")
                .to_string_lossy()
                .into_owned()
        });

        Self {
            config_path,
            settings: ShellSettings::default(),
            changed: false,
        }
    }

    fn commit(&mut self, settings: ShellSettings) -> Result<(), SettingsError> {
        self.settings = settings;
        self.changed = true;
        self.save()
    }
}

impl SettingsEngineTrait for SettingsEngine {
    /// A missing file yields defaults. A file that does not parse, or whose
    /// values would produce scheme-less locations, is an error.
    fn load(&mut self) -> Result<ShellSettings, SettingsError> {
        let path = Path::new(&self.config_path);
        if !path.exists() {
            log::debug!("No settings at {}, using defaults", self.config_path);
            self.settings = ShellSettings::default();
            return Ok(self.settings.clone());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| SettingsError::IoError(format!("Failed to read config file: {}", e)))?;
        let settings: ShellSettings = serde_json::from_str(&content).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to parse config file: {}", e))
        })?;
        settings.validate()?;

        self.settings = settings;
        Ok(self.settings.clone())
    }

    fn save(&self) -> Result<(), SettingsError> {
        let path = Path::new(&self.config_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SettingsError::IoError(format!("Failed to create config directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(&self.settings).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to serialize settings: {}", e))
        })?;
        fs::write(path, json)
            .map_err(|e| SettingsError::IoError(format!("Failed to write config file: {}", e)))
    }

    fn get_settings(&self) -> &ShellSettings {
        &self.settings
    }

    /// Updates one value, e.g. `"general.default_scheme"`. Nothing changes
    /// unless the resulting settings validate.
    fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError> {
        let key: SettingKey = key.parse()?;
        let mut candidate = self.settings.clone();
        candidate.apply(key, value)?;
        candidate.validate()?;

        self.commit(candidate)?;
        log::info!("Setting {} updated", key);
        Ok(())
    }

    fn reset(&mut self) -> Result<(), SettingsError> {
        self.commit(ShellSettings::default())?;
        log::info!("Settings reset to defaults");
        Ok(())
    }

    fn take_changed(&mut self) -> Option<ShellSettings> {
        std::mem::take(&mut self.changed).then(|| self.settings.clone())
    }

    fn get_config_path(&self) -> &str {
        &self.config_path
    }
}
