use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("CliError: {0}")]
    Cli(#[from] CliError),
    #[error("ApiError: {0}")]
    Api(#[from] ApiError),
    #[error("AuthError: {0}")]
    Auth(#[from] AuthError),
    #[error("FilterError: {0}")]
    Filter(#[from] FilterError),
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("Prompt failed: {0}")]
    Prompt(String),
}

/// Failures while talking to a resource endpoint
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request to {endpoint} timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64, endpoint: String },
    #[error("Network failure calling {endpoint}: {message}")]
    NetworkFailure { endpoint: String, message: String },
    #[error("Unexpected status {status} from {endpoint}: {body}")]
    NonSuccessStatus {
        status: u16,
        endpoint: String,
        body: String,
    },
    #[error("Malformed response from {endpoint}: {message}")]
    MalformedResponse { endpoint: String, message: String },
}

/// Failures while obtaining a bearer token
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Falcon credentials not found")]
    MissingCredentials,
    #[error("Invalid cloud region: {region}")]
    UnknownRegion { region: String },
    #[error("Token request failed: {message}")]
    NetworkFailure { message: String },
    #[error("Token request returned status {status}: {body}")]
    NonSuccessStatus { status: u16, body: String },
    #[error("Token response could not be parsed: {message}")]
    MalformedResponse { message: String },
}

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Cannot use both --filter and --filter-name")]
    Conflict,
    #[error("Filter '{name}' not found for type '{filter_type}'")]
    NotFound { name: String, filter_type: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration field '{field}' is missing")]
    MissingField { field: String },
    #[error("Invalid configuration value for '{field}': {value}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },
    #[error("Home directory not found")]
    HomeDirNotFound,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorSeverity {
    Critical,
    High,
    Medium,
    Low,
}

impl ErrorSeverity {
    pub fn label(&self) -> &'static str {
        match self {
            ErrorSeverity::Critical => "critical",
            ErrorSeverity::High => "error",
            ErrorSeverity::Medium => "error",
            ErrorSeverity::Low => "warning",
        }
    }
}

impl AppError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Cli(_) => ErrorSeverity::Medium,
            AppError::Api(api_error) => match api_error {
                ApiError::NonSuccessStatus { status, .. } if *status >= 500 => ErrorSeverity::High,
                ApiError::NetworkFailure { .. } => ErrorSeverity::High,
                _ => ErrorSeverity::Medium,
            },
            AppError::Auth(_) => ErrorSeverity::High,
            AppError::Filter(_) => ErrorSeverity::Low,
            AppError::Config(_) => ErrorSeverity::High,
            AppError::Storage(StorageError::HomeDirNotFound) => ErrorSeverity::Critical,
            AppError::Storage(_) => ErrorSeverity::Medium,
        }
    }

    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::Auth(AuthError::MissingCredentials) => {
                Some("Run 'falcon-cli init' to configure your API credentials".to_string())
            }
            AppError::Auth(AuthError::UnknownRegion { .. }) => Some(
                "Valid regions are us-1, us-2, eu-1, us-gov-1 and us-gov-2".to_string(),
            ),
            AppError::Auth(AuthError::NonSuccessStatus { status: 401 | 403, .. }) => Some(
                "Check that the API client is enabled and the secret is current".to_string(),
            ),
            AppError::Api(ApiError::NonSuccessStatus { status: 403, .. }) => {
                Some("The API client may lack the scope required for this endpoint".to_string())
            }
            AppError::Api(ApiError::Timeout { .. } | ApiError::NetworkFailure { .. }) => {
                Some("Check your internet connection and try again".to_string())
            }
            AppError::Filter(FilterError::NotFound { .. }) => {
                Some("'falcon-cli filter list' shows the saved filters".to_string())
            }
            _ => None,
        }
    }
}
