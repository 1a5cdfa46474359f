//! Configuration for the readability analyzer.
//!
//! Handles loading and parsing of the `jreadability.toml` configuration file.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// MeCab invocation settings
    #[serde(default)]
    pub mecab: MecabConfig,
}

/// MeCab invocation configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MecabConfig {
    /// UniDic dictionary directory (can also be set via environment variable)
    #[serde(default)]
    pub dicdir: Option<PathBuf>,

    /// MeCab executable (defaults to `mecab` on PATH)
    #[serde(default)]
    pub executable: Option<PathBuf>,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &PathBuf) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Get default config file path
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "jreadability")
            .map(|dirs| dirs.config_dir().join("jreadability.toml"))
    }

    /// Load configuration from default path or workspace
    pub fn load_from_default() -> Self {
        // Try workspace path first
        let workspace_path = PathBuf::from("jreadability.toml");
        if workspace_path.exists() {
            if let Ok(config) = Self::load(&workspace_path) {
                return config;
            }
        }

        // Try user config directory
        if let Some(default_path) = Self::default_path() {
            if let Ok(config) = Self::load(&default_path) {
                return config;
            }
        }

        Config::default()
    }

    /// Get the effective dictionary directory (from config or environment)
    pub fn get_dicdir(&self) -> Option<PathBuf> {
        if let Some(ref dicdir) = self.mecab.dicdir {
            return Some(dicdir.clone());
        }

        std::env::var_os("MECAB_DICDIR").map(PathBuf::from)
    }

    /// Get the effective MeCab executable
    pub fn get_executable(&self) -> PathBuf {
        self.mecab
            .executable
            .clone()
            .unwrap_or_else(|| PathBuf::from("mecab"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert!(config.mecab.dicdir.is_none());
        assert!(config.mecab.executable.is_none());
        assert_eq!(config.get_executable(), PathBuf::from("mecab"));
    }

    #[test]
    fn test_parse_minimal_toml() {
        let toml_str = r#"
[mecab]
dicdir = "/usr/lib/unidic"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();

        assert_eq!(config.mecab.dicdir, Some(PathBuf::from("/usr/lib/unidic")));
        assert!(config.mecab.executable.is_none());
    }

    #[test]
    fn test_parse_full_toml() {
        let toml_str = r#"
[mecab]
dicdir = "/opt/unidic-cwj"
executable = "/opt/mecab/bin/mecab"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();

        assert_eq!(config.mecab.dicdir, Some(PathBuf::from("/opt/unidic-cwj")));
        assert_eq!(
            config.get_executable(),
            PathBuf::from("/opt/mecab/bin/mecab")
        );
    }

    #[test]
    fn test_get_dicdir_prefers_config() {
        let mut config = Config::default();
        config.mecab.dicdir = Some(PathBuf::from("/usr/lib/unidic"));

        assert_eq!(config.get_dicdir(), Some(PathBuf::from("/usr/lib/unidic")));
    }

    #[test]
    fn test_load_nonexistent_file() {
        let path = PathBuf::from("/nonexistent/path/jreadability.toml");
        let config = Config::load(&path).unwrap();

        // Should return default config
        assert!(config.mecab.dicdir.is_none());
    }

    #[test]
    fn test_serialize_config() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();

        assert!(toml_str.contains("[mecab]"));
    }
}
