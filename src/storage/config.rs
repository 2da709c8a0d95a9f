//! Configuration management
//!
//! Single YAML file holding the Falcon API credentials and the saved filters.
//! Default location is `~/.falcon-cli/config.yaml`; `--config` selects another file.

use super::Result;
use super::credentials::Credentials;
use crate::error::StorageError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const CONFIG_DIR_NAME: &str = ".falcon-cli";
const CONFIG_FILE_NAME: &str = "config.yaml";

/// Application configuration
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub falcon: Credentials,
    #[serde(default)]
    pub filters: Vec<Filter>,
}

/// A named filter expression, unique per (name, type)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Filter {
    pub name: String,
    #[serde(rename = "type")]
    pub filter_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "filter")]
    pub expression: String,
}

impl Filter {
    pub fn new(name: &str, filter_type: &str, description: &str, expression: &str) -> Self {
        Self {
            name: name.to_string(),
            filter_type: filter_type.to_string(),
            description: description.to_string(),
            expression: expression.to_string(),
        }
    }

    pub fn matches(&self, name: &str, filter_type: &str) -> bool {
        self.name == name && self.filter_type == filter_type
    }
}

impl Config {
    /// Load configuration from file; a missing file yields the default config
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if !config_path.exists() {
            log::debug!("No config file at {}", config_path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config =
            serde_yaml::from_str(&content).map_err(|e| StorageError::ConfigParseError {
                message: format!("Failed to parse {}: {}", config_path.display(), e),
            })?;

        Ok(config)
    }

    /// Save configuration to file, creating the parent directory if needed
    pub fn save(&self, path: Option<PathBuf>) -> Result<()> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::FileIo {
                path: parent.to_string_lossy().to_string(),
                source,
            })?;
        }

        let yaml_content =
            serde_yaml::to_string(self).map_err(|e| StorageError::ConfigParseError {
                message: format!("Failed to serialize config: {}", e),
            })?;

        fs::write(&config_path, yaml_content).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        Ok(())
    }

    pub fn config_file_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().ok_or(StorageError::HomeDirNotFound)?;
        Ok(home_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    pub fn set_credentials(&mut self, credentials: Credentials) {
        self.falcon = credentials;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(!config.falcon.is_complete());
        assert!(config.filters.is_empty());
    }

    #[test]
    fn test_config_load_save() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("config.yaml");

        let mut config = Config::default();
        config.set_credentials(Credentials::new(
            "client".to_string(),
            "secret".to_string(),
            "eu-1".to_string(),
        ));
        config.filters.push(Filter::new(
            "windows",
            "hosts",
            "All Windows hosts",
            "platform_name:'Windows'",
        ));

        config
            .save(Some(config_path.clone()))
            .expect("Failed to save config");
        let loaded = Config::load(Some(config_path)).expect("Failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_yaml_layout_uses_external_key_names() {
        let yaml = r#"
falcon:
  client_id: abc
  client_secret: def
  cloud_region: us-2
filters:
  - name: linux
    type: hosts
    description: Linux boxes
    filter: platform_name:'Linux'
"#;
        let config: Config = serde_yaml::from_str(yaml).expect("Failed to parse yaml");
        assert_eq!(config.falcon.client_id, "abc");
        assert_eq!(config.falcon.cloud_region, "us-2");
        assert_eq!(config.filters.len(), 1);
        assert_eq!(config.filters[0].filter_type, "hosts");
        assert_eq!(config.filters[0].expression, "platform_name:'Linux'");

        let written = serde_yaml::to_string(&config).expect("Failed to serialize");
        assert!(written.contains("type: hosts"));
        assert!(written.contains("filter: platform_name:'Linux'"));
    }

    #[test]
    fn test_load_nonexistent_file() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let nonexistent_path = temp_dir.path().join("nonexistent.yaml");

        let config = Config::load(Some(nonexistent_path)).expect("Missing file is not an error");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_empty_file() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.yaml");
        fs::write(&config_path, "\n").expect("Failed to write file");

        let config = Config::load(Some(config_path)).expect("Empty file is not an error");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.yaml");
        fs::write(&config_path, "filters: [unclosed").expect("Failed to write file");

        let result = Config::load(Some(config_path));
        assert!(matches!(
            result,
            Err(StorageError::ConfigParseError { .. })
        ));
    }
}
