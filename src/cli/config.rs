//! Configuration management for CyberBuddy
//!
//! Provides TOML-based configuration with defaults and validation.
//! Location: ~/.cyberbuddy/config.toml

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use crate::errors::{BotError, Result};

const CONFIG_DIR: &str = ".cyberbuddy";
const CONFIG_FILE: &str = "config.toml";

/// Complete configuration for CyberBuddy
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub bot: BotConfig,
    pub session: SessionConfig,
    pub knowledge: KnowledgeConfig,
    pub display: DisplayConfig,
}

/// Bot identity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Name shown in the banner and prompt
    pub name: String,
    /// What to call the user before they introduce themselves
    pub fallback_user_name: String,
}

/// Per-session behavior
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Fixed RNG seed; random when unset
    pub seed: Option<u64>,
}

/// Knowledge base source
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeConfig {
    /// TOML knowledge file; the built-in tables are used when unset
    pub file: Option<String>,
}

/// Terminal output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub color_output: bool,
    pub show_banner: bool,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: "CyberBuddy".to_string(),
            fallback_user_name: "friend".to_string(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color_output: true,
            show_banner: true,
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(config_path) = path {
            Self::load_from_file(config_path)
        } else {
            Self::load_default()
        }
    }

    /// Load configuration from specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| BotError::ConfigError(format!("Failed to read config {}: {}", path.display(), e)))?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| BotError::ConfigError(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load default configuration from standard location or use built-in defaults
    pub fn load_default() -> Result<Self> {
        if let Some(config_path) = Self::default_path() {
            if config_path.exists() {
                return Self::load_from_file(&config_path);
            }
        }

        Ok(Config::default())
    }

    /// `~/.cyberbuddy/config.toml`, when a home directory exists
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.bot.name.trim().is_empty() {
            return Err(BotError::ConfigError("bot.name must not be empty".to_string()));
        }

        if self.bot.fallback_user_name.trim().is_empty() {
            return Err(BotError::ConfigError(
                "bot.fallback_user_name must not be empty".to_string(),
            ));
        }

        if let Some(file) = &self.knowledge.file {
            if file.trim().is_empty() {
                return Err(BotError::ConfigError(
                    "knowledge.file must not be empty when set".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| BotError::ConfigError(format!("Failed to serialize config: {}", e)))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| BotError::ConfigError(format!("Failed to create config dir: {}", e)))?;
        }

        std::fs::write(path, contents)
            .map_err(|e| BotError::ConfigError(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    /// Expand tilde in paths
    pub fn expand_path(path: &str) -> PathBuf {
        if let Some(rest) = path.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest);
            }
        }
        PathBuf::from(path)
    }

    /// Knowledge file path with `~` expanded
    pub fn knowledge_path(&self) -> Option<PathBuf> {
        self.knowledge.file.as_deref().map(Self::expand_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.bot.name, "CyberBuddy");
        assert_eq!(config.bot.fallback_user_name, "friend");
        assert!(config.session.seed.is_none());
        assert!(config.knowledge.file.is_none());
        assert!(config.display.color_output);
    }

    #[test]
    fn test_config_validation_success() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_config_validation_blank_names() {
        let mut config = Config::default();
        config.bot.name = "  ".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.bot.fallback_user_name = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_blank_knowledge_file() {
        let mut config = Config::default();
        config.knowledge.file = Some(" ".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[session]\nseed = 9\n").unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.session.seed, Some(9));
        assert_eq!(config.bot, BotConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.bot.fallback_user_name = "agent".to_string();
        config.display.show_banner = false;
        config.save(&path).unwrap();

        assert_eq!(Config::load(Some(&path)).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let dir = TempDir::new().unwrap();
        let err = Config::load_from_file(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, BotError::ConfigError(_)));
    }

    #[test]
    fn test_load_invalid_toml_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[bot\nname = ").unwrap();
        assert!(Config::load_from_file(&path).is_err());
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let expanded = Config::expand_path("~/.cyberbuddy");
        assert!(!expanded.to_string_lossy().contains('~'));
    }

    #[test]
    fn test_expand_path_without_tilde() {
        let path = "/absolute/path";
        assert_eq!(Config::expand_path(path).to_string_lossy(), path);
    }
}
