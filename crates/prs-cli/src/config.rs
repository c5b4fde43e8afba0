//! User configuration file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV_VAR: &str = "PRS_CONFIG";

/// Settings read from `config.toml`.
///
/// ```toml
/// api_url = "https://github.example.com/api/v3"
/// default_repository = "acme/widgets"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// REST API root, for GitHub Enterprise.
    pub api_url: Option<String>,

    /// Repository used when `--repo` is not given.
    pub default_repository: Option<String>,
}

impl Config {
    /// Where the config file is looked up: `$PRS_CONFIG`, else
    /// `<config dir>/prs/config.toml`.
    #[must_use]
    pub fn path() -> Option<PathBuf> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) if !path.is_empty() => Some(PathBuf::from(path)),
            _ => dirs::config_dir().map(|dir| dir.join("prs").join("config.toml")),
        }
    }

    /// Load from the default location. A missing file yields defaults.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        match Self::path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load from an explicit path.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_load_full_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "api_url = \"https://ghe.example.com/api/v3\"\ndefault_repository = \"acme/widgets\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.api_url.as_deref(), Some("https://ghe.example.com/api/v3"));
        assert_eq!(config.default_repository.as_deref(), Some("acme/widgets"));
    }

    #[test]
    fn test_missing_keys_default() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "default_repository = \"acme/widgets\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(config.api_url.is_none());
        assert_eq!(config.default_repository.as_deref(), Some("acme/widgets"));
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "api_url = [").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid config file"));
    }

    #[test]
    fn test_unreadable_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let err = Config::load_from(&temp.path().join("missing.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
