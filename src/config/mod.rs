use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::constants::*;

/// Application configuration with sensible defaults.
///
/// Can be overridden via ~/.config/plant-status/config.toml
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Fade-out window after a hide request, in milliseconds
    pub hide_transition_ms: u64,
    /// Theme name (built-in or custom)
    pub theme: String,
    /// UI language (en, pt-BR)
    pub lang: String,
    /// Base URL for inventory item images
    pub asset_base_url: String,
    /// Log file location
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hide_transition_ms: DEFAULT_HIDE_TRANSITION_MS,
            theme: "default".to_string(),
            lang: "en".to_string(),
            asset_base_url: DEFAULT_ASSET_BASE_URL.to_string(),
            log_file: default_log_path(),
        }
    }
}

/// TOML-deserializable config file format.
/// All fields are optional; missing fields use defaults.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct FileConfig {
    hide_transition_ms: Option<u64>,
    theme: Option<String>,
    lang: Option<String>,
    asset_base_url: Option<String>,
    log_file: Option<PathBuf>,
}

impl Config {
    /// Load config from ~/.config/plant-status/config.toml, falling back to
    /// defaults for any missing fields. If the file doesn't exist, returns
    /// pure defaults.
    pub fn load() -> Self {
        Self::load_from(&config_file_path())
    }

    pub fn load_from(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(_) => return Config::default(), // No config file, use defaults
        };

        match Self::from_toml_str(&content) {
            Ok(config) => config,
            Err(e) => {
                // Logging is not up yet; the terminal is still ours here
                eprintln!(
                    "Warning: Failed to parse {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Config::default()
            }
        }
    }

    /// Merge a TOML document over the defaults, clamping out-of-range values.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        let file_config: FileConfig = toml::from_str(content)?;
        let mut config = Config::default();

        if let Some(v) = file_config.hide_transition_ms {
            config.hide_transition_ms = v.min(MAX_HIDE_TRANSITION_MS);
        }
        if let Some(v) = file_config.theme {
            if !v.is_empty() {
                config.theme = v;
            }
        }
        if let Some(v) = file_config.lang {
            if !v.is_empty() {
                config.lang = v;
            }
        }
        if let Some(v) = file_config.asset_base_url {
            if !v.is_empty() {
                config.asset_base_url = v;
            }
        }
        if let Some(v) = file_config.log_file {
            if !v.as_os_str().is_empty() {
                config.log_file = v;
            }
        }

        Ok(config)
    }

    /// Fall back to English for languages without a locale file.
    pub fn resolved_lang(&self) -> &str {
        if LANGUAGES.contains(&self.lang.as_str()) {
            &self.lang
        } else {
            "en"
        }
    }
}
