use crate::AppError;
use crate::api::regions::Region;
use crate::error::ConfigError;
use crate::storage::config::Config;
use crate::storage::credentials::Credentials;
use std::path::PathBuf;

/// Configuration service for managing the stored API credentials
pub struct ConfigService {
    config: Config,
    path: Option<PathBuf>,
}

impl ConfigService {
    /// Create new ConfigService instance
    pub fn new(config: Config, path: Option<PathBuf>) -> Self {
        Self { config, path }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn credentials(&self) -> &Credentials {
        &self.config.falcon
    }

    /// Validate and store new credentials; saved filters are kept
    pub fn set_credentials(&mut self, credentials: Credentials) -> Result<(), AppError> {
        if credentials.client_id.is_empty() {
            return Err(ConfigError::MissingField {
                field: "falcon.client_id".to_string(),
            }
            .into());
        }
        if credentials.client_secret.is_empty() {
            return Err(ConfigError::MissingField {
                field: "falcon.client_secret".to_string(),
            }
            .into());
        }
        if credentials.cloud_region.parse::<Region>().is_err() {
            return Err(ConfigError::InvalidValue {
                field: "falcon.cloud_region".to_string(),
                value: credentials.cloud_region.clone(),
                reason: "unknown cloud region".to_string(),
            }
            .into());
        }

        self.config.set_credentials(credentials);
        Ok(())
    }

    /// Save configuration to file
    pub fn save_config(&self) -> Result<PathBuf, AppError> {
        let path = match &self.path {
            Some(p) => p.clone(),
            None => Config::config_file_path()?,
        };
        self.config.save(Some(path.clone()))?;
        Ok(path)
    }
}
