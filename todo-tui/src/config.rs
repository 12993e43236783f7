use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::engine::clamp_start_value;

const APP_DIR: &str = "todo-tui";
const API_URL_ENV: &str = "TODO_TUI_API_URL";
const QUOTE_URL_ENV: &str = "TODO_TUI_QUOTE_URL";
const LOG_PATH_ENV: &str = "TODO_TUI_LOG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoConfig {
    /// Base URL of the store serving `/todo`, e.g. "http://localhost:3000"
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Endpoint returning `{message, author}`
    #[serde(default = "default_quote_url")]
    pub quote_url: String,

    /// Initial timer length in seconds (30–3600, step 30)
    #[serde(default = "default_timer_start_secs")]
    pub timer_start_secs: u64,
}

fn default_api_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_quote_url() -> String {
    "https://korean-advice-open-api.vercel.app/api/advice".to_string()
}

fn default_timer_start_secs() -> u64 {
    30
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            quote_url: default_quote_url(),
            timer_start_secs: default_timer_start_secs(),
        }
    }
}

fn root_path() -> Result<PathBuf> {
    Ok(dirs::config_dir()
        .context("Cannot determine config directory")?
        .join(APP_DIR))
}

impl TodoConfig {
    pub fn config_path() -> Result<PathBuf> {
        Ok(root_path()?.join("config.toml"))
    }

    pub fn log_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(LOG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }
        Ok(root_path()?.join("todo-tui.log"))
    }

    /// Load config from the default location, then apply environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path()?)?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Returns the default config if the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let mut config: Self = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        config.timer_start_secs = clamp_start_value(config.timer_start_secs);
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(API_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.api_url = url;
        }
        if let Some(url) = lookup(QUOTE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.quote_url = url;
        }
    }

    /// Save config, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(path, raw)
            .with_context(|| format!("Failed to write config at {}", path.display()))?;
        Ok(())
    }

    /// Write the default config unless a file is already there. Returns whether
    /// a file was created.
    pub fn ensure_default_at(path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        Self::default().save_to(path)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = TodoConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, TodoConfig::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "api_url = \"http://example.test:8080\"\n").unwrap();

        let config = TodoConfig::load_from(&path).unwrap();

        assert_eq!(config.api_url, "http://example.test:8080");
        assert_eq!(config.quote_url, default_quote_url());
        assert_eq!(config.timer_start_secs, 30);
    }

    #[test]
    fn timer_start_is_snapped_into_range() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "timer_start_secs = 5000\n").unwrap();

        let config = TodoConfig::load_from(&path).unwrap();

        assert_eq!(config.timer_start_secs, 3600);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "api_url = ").unwrap();

        assert!(TodoConfig::load_from(&path).is_err());
    }

    #[test]
    fn ensure_default_creates_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        assert!(TodoConfig::ensure_default_at(&path).unwrap());
        assert!(!TodoConfig::ensure_default_at(&path).unwrap());
        assert_eq!(TodoConfig::load_from(&path).unwrap(), TodoConfig::default());
    }

    #[test]
    fn env_overrides_replace_urls() {
        let mut config = TodoConfig::default();
        config.apply_env_overrides(|key| match key {
            "TODO_TUI_API_URL" => Some("http://override:1234".to_string()),
            "TODO_TUI_QUOTE_URL" => Some("  ".to_string()),
            _ => None,
        });

        assert_eq!(config.api_url, "http://override:1234");
        assert_eq!(config.quote_url, default_quote_url());
    }
}
