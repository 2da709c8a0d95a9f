use crate::api::HOSTS_QUERY_ENDPOINT;
use crate::api::client::FalconClient;
use crate::api::models::HostsResponse;
use crate::cli::main_types::{ConfigCommands, CredentialArgs, FilterCommands};
use crate::core::auth::SetupInput;
use crate::core::services::config_service::ConfigService;
use crate::core::services::filter_service::{FilterService, SaveOutcome};
use crate::display::{TableDisplay, format_json};
use crate::error::AppError;
use crate::storage::config::Filter;
use crate::utils::logging::print_verbose;
use crate::utils::validation::validate_filter;
use serde_json::Value;

/// Filter type used for saved host filters
pub const HOSTS_FILTER_TYPE: &str = "hosts";

#[derive(Default)]
pub struct InitHandler;

impl InitHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        args: CredentialArgs,
        config_service: &mut ConfigService,
        verbose: bool,
    ) -> Result<(), AppError> {
        print_verbose(verbose, "Collecting Falcon API credentials");

        let input =
            SetupInput::from_args_or_prompt(args.client_id, args.client_secret, args.cloud_region)?;
        input.validate()?;

        config_service.set_credentials(input.into_credentials())?;
        let path = config_service.save_config()?;

        println!("\nConfiguration saved successfully!");
        println!("Config file location: {}", path.display());
        Ok(())
    }
}

#[derive(Default)]
pub struct ConfigHandler;

impl ConfigHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        command: ConfigCommands,
        config_service: &ConfigService,
        verbose: bool,
    ) -> Result<(), AppError> {
        match command {
            ConfigCommands::Show => {
                print_verbose(verbose, "Attempting config show command");

                let credentials = config_service.credentials();
                let or_unset = |value: &str| {
                    if value.is_empty() {
                        "(not set)".to_string()
                    } else {
                        value.to_string()
                    }
                };

                println!("Current Configuration:");
                println!("=====================");
                println!("Client ID: {}", or_unset(&credentials.client_id));
                println!("Client Secret: {}", credentials.masked_secret());
                println!("Cloud Region: {}", or_unset(&credentials.cloud_region));
                println!("Saved Filters: {}", config_service.config().filters.len());
                Ok(())
            }
        }
    }
}

#[derive(Default)]
pub struct FilterHandler;

impl FilterHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        command: FilterCommands,
        filter_service: &mut FilterService,
        verbose: bool,
    ) -> Result<(), AppError> {
        match command {
            FilterCommands::Save {
                name,
                filter_type,
                description,
                filter,
            } => {
                print_verbose(
                    verbose,
                    &format!("Saving filter '{}' of type '{}'", name, filter_type),
                );
                validate_filter(&name, &filter_type, &filter)?;

                let outcome =
                    filter_service.save(Filter::new(&name, &filter_type, &description, &filter))?;
                match outcome {
                    SaveOutcome::Created => {
                        println!("Saved filter '{}' for type '{}'", name, filter_type)
                    }
                    SaveOutcome::Updated => {
                        println!("Updated filter '{}' for type '{}'", name, filter_type)
                    }
                }
                Ok(())
            }
            FilterCommands::List { filter_type } => {
                if filter_service.filters().is_empty() {
                    println!("No filters saved");
                    return Ok(());
                }

                let filters = filter_service.list(filter_type.as_deref());
                print_verbose(verbose, &format!("{} filter(s) matched", filters.len()));

                println!("Saved filters:");
                println!("{}", TableDisplay::new().render_filters(&filters));
                Ok(())
            }
            FilterCommands::Delete { name, filter_type } => {
                filter_service.delete(&name, &filter_type)?;
                println!("Deleted filter '{}' of type '{}'", name, filter_type);
                Ok(())
            }
        }
    }
}

#[derive(Default)]
pub struct HostsHandler;

impl HostsHandler {
    pub fn new() -> Self {
        Self
    }

    /// Query host IDs and print the response envelope
    pub async fn handle(
        &self,
        expression: Option<String>,
        client: &FalconClient,
        verbose: bool,
    ) -> Result<(), AppError> {
        let body = self.fetch(expression, client, verbose).await?;
        println!("{}", format_json(&body));
        Ok(())
    }

    pub async fn fetch(
        &self,
        expression: Option<String>,
        client: &FalconClient,
        verbose: bool,
    ) -> Result<Value, AppError> {
        let query: Vec<(&str, &str)> = expression
            .as_deref()
            .map(|expr| vec![("filter", expr)])
            .unwrap_or_default();
        print_verbose(
            verbose,
            &format!("Querying {} with {:?}", HOSTS_QUERY_ENDPOINT, query),
        );

        let response = client.get(HOSTS_QUERY_ENDPOINT, &query).await?;
        let body: Value = FalconClient::parse_response(response).await?;

        match serde_json::from_value::<HostsResponse>(body.clone()) {
            Ok(hosts) => {
                log::debug!(
                    "{} host(s) returned, trace id {:?}",
                    hosts.resources.len(),
                    hosts.meta.trace_id
                );
                for error in &hosts.errors {
                    log::warn!("API reported error {}: {}", error.code, error.message);
                }
            }
            Err(e) => log::debug!("Response does not match the hosts envelope: {}", e),
        }

        Ok(body)
    }
}
