use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::SettingsError;
use super::location::{is_scheme_token, DEFAULT_SCHEME, RECOGNIZED_SCHEMES};

/// Top-level shell settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ShellSettings {
    pub general: GeneralSettings,
    pub navigation: NavigationSettings,
}

/// Where tabs start and how typed addresses are completed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralSettings {
    /// Address of the tab opened at startup.
    pub seed_url: String,
    /// Address of every tab opened afterwards.
    pub new_tab_url: String,
    pub default_scheme: String,
    #[serde(default = "default_recognized_schemes")]
    pub recognized_schemes: Vec<String>,
}

fn default_recognized_schemes() -> Vec<String> {
    RECOGNIZED_SCHEMES.iter().map(|s| s.to_string()).collect()
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            seed_url: "https://jobi.one".to_string(),
            new_tab_url: "about:blank".to_string(),
            default_scheme: DEFAULT_SCHEME.to_string(),
            recognized_schemes: default_recognized_schemes(),
        }
    }
}

/// Controller behaviour toggles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavigationSettings {
    /// Ignore load completions that belong to a superseded navigation.
    pub discard_stale_completions: bool,
    /// Show a typed address before its view confirms the load.
    pub optimistic_address: bool,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            discard_stale_completions: true,
            optimistic_address: true,
        }
    }
}

/// Every individually settable value, addressed as `section.field`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKey {
    SeedUrl,
    NewTabUrl,
    DefaultScheme,
    RecognizedSchemes,
    DiscardStaleCompletions,
    OptimisticAddress,
}

impl SettingKey {
    pub const ALL: [SettingKey; 6] = [
        SettingKey::SeedUrl,
        SettingKey::NewTabUrl,
        SettingKey::DefaultScheme,
        SettingKey::RecognizedSchemes,
        SettingKey::DiscardStaleCompletions,
        SettingKey::OptimisticAddress,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SettingKey::SeedUrl => "general.seed_url",
            SettingKey::NewTabUrl => "general.new_tab_url",
            SettingKey::DefaultScheme => "general.default_scheme",
            SettingKey::RecognizedSchemes => "general.recognized_schemes",
            SettingKey::DiscardStaleCompletions => "navigation.discard_stale_completions",
            SettingKey::OptimisticAddress => "navigation.optimistic_address",
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettingKey {
    type Err = SettingsError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        if key.is_empty() {
            return Err(SettingsError::InvalidKey("Key cannot be empty".to_string()));
        }
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == key)
            .ok_or_else(|| SettingsError::InvalidKey(format!("Key '{}' not found in settings", key)))
    }
}

impl ShellSettings {
    /// Writes `value` into the field named by `key`. The value must have the
    /// field's JSON type; range checks are left to [`validate`](Self::validate).
    pub fn apply(&mut self, key: SettingKey, value: Value) -> Result<(), SettingsError> {
        match key {
            SettingKey::SeedUrl => self.general.seed_url = typed(key, value)?,
            SettingKey::NewTabUrl => self.general.new_tab_url = typed(key, value)?,
            SettingKey::DefaultScheme => self.general.default_scheme = typed(key, value)?,
            SettingKey::RecognizedSchemes => self.general.recognized_schemes = typed(key, value)?,
            SettingKey::DiscardStaleCompletions => {
                self.navigation.discard_stale_completions = typed(key, value)?
            }
            SettingKey::OptimisticAddress => self.navigation.optimistic_address = typed(key, value)?,
        }
        Ok(())
    }

    /// Checks the values every `Location` is built from: start addresses must
    /// not be blank and every scheme must be a bare scheme token.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let general = &self.general;
        for (key, url) in [
            (SettingKey::SeedUrl, &general.seed_url),
            (SettingKey::NewTabUrl, &general.new_tab_url),
        ] {
            if url.trim().is_empty() {
                return Err(SettingsError::InvalidValue(format!("{} must not be blank", key)));
            }
        }
        if !is_scheme_token(&general.default_scheme) {
            return Err(SettingsError::InvalidValue(format!(
                "{}: '{}' is not a scheme",
                SettingKey::DefaultScheme,
                general.default_scheme
            )));
        }
        if let Some(bad) = general.recognized_schemes.iter().find(|s| !is_scheme_token(s)) {
            return Err(SettingsError::InvalidValue(format!(
                "{}: '{}' is not a scheme",
                SettingKey::RecognizedSchemes,
                bad
            )));
        }
        Ok(())
    }
}

fn typed<T: DeserializeOwned>(key: SettingKey, value: Value) -> Result<T, SettingsError> {
    serde_json::from_value(value)
        .map_err(|e| SettingsError::InvalidValue(format!("Invalid value for key '{}': {}", key, e)))
}
