use crate::api::regions::Region;
use crate::error::{AppError, CliError};
use crate::storage::credentials::Credentials;
use dialoguer::{Input, Select};
use rpassword::prompt_password;

/// API credential input for `init`
#[derive(Clone)]
pub struct SetupInput {
    pub client_id: String,
    pub client_secret: String,
    pub cloud_region: String,
}

impl SetupInput {
    /// Use the supplied values and prompt only for the missing ones
    pub fn from_args_or_prompt(
        client_id: Option<String>,
        client_secret: Option<String>,
        cloud_region: Option<String>,
    ) -> Result<Self, AppError> {
        let client_id = match client_id.filter(|v| !v.is_empty()) {
            Some(id) => id,
            None => Input::<String>::new()
                .with_prompt("Enter your Falcon Client ID")
                .validate_with(|input: &String| -> Result<(), &str> {
                    if input.trim().is_empty() {
                        Err("Client ID cannot be empty")
                    } else {
                        Ok(())
                    }
                })
                .interact_text()
                .map_err(|e| prompt_error("client ID", e))?,
        };

        let client_secret = match client_secret.filter(|v| !v.is_empty()) {
            Some(secret) => secret,
            None => prompt_password("Enter your Falcon Client Secret: ")
                .map_err(|e| prompt_error("client secret", e))?,
        };

        let cloud_region = match cloud_region.filter(|v| !v.is_empty()) {
            Some(region) => region,
            None => {
                let options: Vec<&str> = Region::ALL.iter().map(Region::as_str).collect();
                let selected = Select::new()
                    .with_prompt("Select your Falcon Cloud Region")
                    .items(&options)
                    .default(0)
                    .interact()
                    .map_err(|e| prompt_error("cloud region", e))?;
                options[selected].to_string()
            }
        };

        Ok(Self {
            client_id: client_id.trim().to_string(),
            client_secret: client_secret.trim().to_string(),
            cloud_region,
        })
    }

    /// Validate that credentials are not empty and the region is known
    pub fn validate(&self) -> Result<(), AppError> {
        if self.client_id.is_empty() {
            return Err(AppError::Cli(CliError::InvalidArguments(
                "Client ID cannot be empty".to_string(),
            )));
        }
        if self.client_secret.is_empty() {
            return Err(AppError::Cli(CliError::InvalidArguments(
                "Client Secret cannot be empty".to_string(),
            )));
        }
        self.cloud_region.parse::<Region>()?;
        Ok(())
    }

    pub fn into_credentials(self) -> Credentials {
        Credentials::new(self.client_id, self.client_secret, self.cloud_region)
    }
}

fn prompt_error(field: &str, error: impl std::fmt::Display) -> AppError {
    AppError::Cli(CliError::Prompt(format!("Failed to read {}: {}", field, error)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AuthError;

    fn full_args() -> Result<SetupInput, AppError> {
        SetupInput::from_args_or_prompt(
            Some(" client-id ".to_string()),
            Some("secret\n".to_string()),
            Some("eu-1".to_string()),
        )
    }

    #[test]
    fn test_all_args_skip_prompts() {
        let input = full_args().expect("no prompt should be needed");
        assert_eq!(input.client_id, "client-id");
        assert_eq!(input.client_secret, "secret");
        assert_eq!(input.cloud_region, "eu-1");
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_region() {
        let mut input = full_args().expect("no prompt should be needed");
        input.cloud_region = "eu-9".to_string();
        assert!(matches!(
            input.validate(),
            Err(AppError::Auth(AuthError::UnknownRegion { .. }))
        ));
    }

    #[test]
    fn test_validate_rejects_blank_secret() {
        let mut input = full_args().expect("no prompt should be needed");
        input.client_secret = String::new();
        assert!(matches!(
            input.validate(),
            Err(AppError::Cli(CliError::InvalidArguments(_)))
        ));
    }

    #[test]
    fn test_into_credentials() {
        let creds = full_args()
            .expect("no prompt should be needed")
            .into_credentials();
        assert!(creds.is_complete());
        assert_eq!(creds.cloud_region, "eu-1");
    }
}
