//! Configuration management for displaykit

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Template root used when nothing else is configured
pub const DEFAULT_TEMPLATES_DIR: &str = "templates";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding HTML templates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templates_dir: Option<PathBuf>,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// User preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".displaykit").join("config.yaml"))
    }

    /// Resolve an optional override to a concrete config path
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from an explicit path, or the default location.
    ///
    /// An explicit path must exist. A missing default file yields the
    /// default configuration.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from(Path::new(p)),
            None => {
                let default = Self::default_path()?;
                if default.exists() {
                    Self::load_from(&default)
                } else {
                    log::debug!("No config at {}, using defaults", default.display());
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }

        let contents = std::fs::read_to_string(path)?;
        if contents.trim().is_empty() {
            log::warn!("Config file {} is empty, using defaults", path.display());
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Save configuration to an explicit path, or the default location
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        self.save_to(&Self::resolve_path(path)?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;
        std::fs::write(path, contents)?;

        // Set file permissions to 600 on Unix systems
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(path, perms)?;
        }

        Ok(())
    }

    /// Template root, with an optional runtime override taking precedence
    pub fn templates_root(&self, override_dir: Option<&str>) -> PathBuf {
        if let Some(dir) = override_dir {
            return PathBuf::from(dir);
        }
        self.templates_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATES_DIR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.templates_dir.is_none());
        assert!(config.preferences.format.is_none());
        assert_eq!(config.templates_root(None), PathBuf::from("templates"));
    }

    #[test]
    fn test_templates_root_precedence() {
        let config = Config {
            templates_dir: Some(PathBuf::from("/srv/views")),
            ..Config::default()
        };

        assert_eq!(config.templates_root(None), PathBuf::from("/srv/views"));
        assert_eq!(
            config.templates_root(Some("/tmp/override")),
            PathBuf::from("/tmp/override")
        );
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nested").join("config.yaml");

        let config = Config {
            templates_dir: Some(PathBuf::from("/srv/views")),
            preferences: Preferences {
                format: Some("json".to_string()),
            },
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.templates_dir, Some(PathBuf::from("/srv/views")));
        assert_eq!(loaded.preferences.format.as_deref(), Some("json"));
    }

    #[cfg(unix)]
    #[test]
    fn test_save_sets_private_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempdir().unwrap();
        let path = temp.path().join("config.yaml");
        Config::default().save_to(&path).unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_load_explicit_missing_path_fails() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("missing.yaml");

        match Config::load_at(path.to_str()) {
            Err(Error::Config(ConfigError::NotFound(p))) => assert!(p.contains("missing.yaml")),
            other => panic!("Expected ConfigError::NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_load_empty_file_uses_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.yaml");
        std::fs::write(&path, "").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(config.templates_dir.is_none());
    }

    #[test]
    fn test_load_invalid_yaml_is_parse_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.yaml");
        std::fs::write(&path, "templates_dir: [unclosed").unwrap();

        match Config::load_from(&path) {
            Err(Error::Config(ConfigError::ParseError(_))) => (),
            other => panic!("Expected ConfigError::ParseError, got {:?}", other),
        }
    }
}
