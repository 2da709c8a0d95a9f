use crate::api::auth::{OAuthTokenProvider, TokenManager};
use crate::api::client::FalconClient;
use crate::cli::command_handlers::{
    ConfigHandler, FilterHandler, HOSTS_FILTER_TYPE, HostsHandler, InitHandler,
};
use crate::cli::main_types::{Commands, CredentialArgs};
use crate::core::services::config_service::ConfigService;
use crate::core::services::filter_service::FilterService;
use crate::error::AppError;
use crate::storage::config::Config;
use crate::storage::credentials::Credentials;
use crate::utils::logging::print_verbose;
use crate::utils::validation::validate_url;
use std::path::PathBuf;
use std::sync::Arc;

pub struct Dispatcher {
    config: Config,
    config_path: Option<PathBuf>,
    verbose: bool,
    overrides: CredentialArgs,
    base_url: Option<String>,
}

impl Dispatcher {
    fn log_verbose(&self, msg: &str) {
        print_verbose(self.verbose, msg);
    }

    pub fn new(
        config: Config,
        config_path: Option<PathBuf>,
        verbose: bool,
        overrides: CredentialArgs,
        base_url: Option<String>,
    ) -> Self {
        Self {
            config,
            config_path,
            verbose,
            overrides,
            base_url: base_url.filter(|url| !url.is_empty()),
        }
    }

    // Effective credentials (CLI arg / env var > config file)
    fn credentials(&self) -> Credentials {
        self.config.falcon.clone().with_overrides(
            self.overrides.client_id.clone(),
            self.overrides.client_secret.clone(),
            self.overrides.cloud_region.clone(),
        )
    }

    fn create_token_manager(&self) -> Result<Arc<TokenManager>, AppError> {
        let credentials = self.credentials();
        let manager = match &self.base_url {
            Some(url) => TokenManager::new(
                credentials,
                OAuthTokenProvider::with_base_url(url.clone())?,
            ),
            None => TokenManager::with_oauth(credentials)?,
        };
        Ok(Arc::new(manager))
    }

    async fn create_client(&self) -> Result<FalconClient, AppError> {
        let tokens = self.create_token_manager()?;
        match &self.base_url {
            Some(url) => {
                validate_url(url)?;
                self.log_verbose(&format!("Using base URL override: {}", url));
                FalconClient::with_base_url(url.clone(), tokens).await
            }
            None => FalconClient::new(tokens).await,
        }
    }

    fn create_filter_service(&self) -> FilterService {
        FilterService::new(self.config.clone(), self.config_path.clone())
    }

    fn create_config_service(&self) -> ConfigService {
        ConfigService::new(self.config.clone(), self.config_path.clone())
    }

    pub async fn dispatch(&self, command: Commands) -> Result<(), AppError> {
        match command {
            Commands::Init => {
                let mut config_service = self.create_config_service();
                InitHandler::new().handle(self.overrides.clone(), &mut config_service, self.verbose)
            }
            Commands::Config { command } => {
                let config_service = self.create_config_service();
                ConfigHandler::new().handle(command, &config_service, self.verbose)
            }
            Commands::Filter { command } => {
                let mut filter_service = self.create_filter_service();
                FilterHandler::new().handle(command, &mut filter_service, self.verbose)
            }
            Commands::Hosts {
                filter,
                filter_name,
            } => {
                // Resolve the filter before touching the network
                let expression = self.create_filter_service().resolve_expression(
                    filter.as_deref(),
                    filter_name.as_deref(),
                    HOSTS_FILTER_TYPE,
                )?;
                let client = self.create_client().await?;
                HostsHandler::new()
                    .handle(expression, &client, self.verbose)
                    .await
            }
        }
    }
}
