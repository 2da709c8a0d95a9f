//! OAuth2 client-credentials token handling
//!
//! [`TokenManager`] owns the cached bearer token. It is constructed once per
//! process and shared behind an `Arc`; every caller goes through
//! [`TokenManager::get_token`], which serves the cached token while it is valid
//! and otherwise performs a single serialized refresh through a [`TokenProvider`].

use crate::api::models::TokenResponse;
use crate::api::regions;
use crate::error::AuthError;
use crate::storage::credentials::Credentials;
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::ACCEPT;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

pub const TOKEN_ENDPOINT: &str = "/oauth2/token";
pub const TOKEN_TIMEOUT_SECS: u64 = 10;
/// Subtracted from the provider's stated lifetime before caching
pub const DEFAULT_SAFETY_MARGIN: Duration = Duration::from_secs(60);

const USER_AGENT: &str = concat!("falcon-cli/", env!("CARGO_PKG_VERSION"));

/// Performs the network exchange that yields a fresh token
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn request_token(&self, credentials: &Credentials) -> Result<TokenResponse, AuthError>;
}

/// Token provider backed by the Falcon `/oauth2/token` endpoint
#[derive(Debug, Clone)]
pub struct OAuthTokenProvider {
    client: Client,
    base_url: Option<String>,
}

impl OAuthTokenProvider {
    /// Provider that derives the endpoint from the credentials' cloud region
    pub fn new() -> Result<Self, AuthError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(TOKEN_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AuthError::NetworkFailure {
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            base_url: None,
        })
    }

    /// Provider pinned to an explicit base URL, ignoring the configured region
    pub fn with_base_url(base_url: String) -> Result<Self, AuthError> {
        let mut provider = Self::new()?;
        provider.base_url = Some(base_url.trim_end_matches('/').to_string());
        Ok(provider)
    }

    fn token_url(&self, credentials: &Credentials) -> Result<String, AuthError> {
        let base_url = match &self.base_url {
            Some(url) => url.as_str(),
            None => regions::base_url_for(&credentials.cloud_region)?,
        };
        Ok(format!("{}{}", base_url, TOKEN_ENDPOINT))
    }
}

#[async_trait]
impl TokenProvider for OAuthTokenProvider {
    async fn request_token(&self, credentials: &Credentials) -> Result<TokenResponse, AuthError> {
        let url = self.token_url(credentials)?;

        let response = self
            .client
            .post(&url)
            .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
            .header(ACCEPT, "application/json")
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| AuthError::NetworkFailure {
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();
        log::debug!("Token request to {} returned {}", url, status);

        if !matches!(status, 200 | 201) {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AuthError::NonSuccessStatus { status, body });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| AuthError::NetworkFailure {
                message: format!("Failed to read token response: {}", e),
            })?;

        serde_json::from_slice(&body).map_err(|e| AuthError::MalformedResponse {
            message: e.to_string(),
        })
    }
}

#[derive(Debug, Clone)]
struct CachedToken {
    token: String,
    expires_at: Instant,
}

impl CachedToken {
    fn is_valid(&self, now: Instant) -> bool {
        !self.token.is_empty() && now < self.expires_at
    }
}

/// Shared, concurrency-safe holder of the current bearer token
pub struct TokenManager {
    credentials: Credentials,
    provider: Box<dyn TokenProvider>,
    safety_margin: Duration,
    cached: RwLock<Option<CachedToken>>,
}

impl TokenManager {
    pub fn new<P>(credentials: Credentials, provider: P) -> Self
    where
        P: TokenProvider + 'static,
    {
        Self {
            credentials,
            provider: Box::new(provider),
            safety_margin: DEFAULT_SAFETY_MARGIN,
            cached: RwLock::new(None),
        }
    }

    /// Token manager talking to the region's real token endpoint
    pub fn with_oauth(credentials: Credentials) -> Result<Self, AuthError> {
        Ok(Self::new(credentials, OAuthTokenProvider::new()?))
    }

    pub fn with_safety_margin(mut self, safety_margin: Duration) -> Self {
        self.safety_margin = safety_margin;
        self
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Return a valid bearer token, refreshing it first if needed
    pub async fn get_token(&self) -> Result<String, AuthError> {
        {
            let cached = self.cached.read().await;
            if let Some(entry) = cached.as_ref().filter(|t| t.is_valid(Instant::now())) {
                log::debug!("Using cached bearer token");
                return Ok(entry.token.clone());
            }
        }

        self.refresh().await
    }

    /// Whether a cached token exists and has not yet expired
    pub async fn has_valid_token(&self) -> bool {
        self.cached
            .read()
            .await
            .as_ref()
            .is_some_and(|t| t.is_valid(Instant::now()))
    }

    async fn refresh(&self) -> Result<String, AuthError> {
        // Held across the network call: concurrent refreshers queue here.
        let mut cached = self.cached.write().await;

        // Another caller may have refreshed while we waited for the lock
        if let Some(entry) = cached.as_ref().filter(|t| t.is_valid(Instant::now())) {
            log::debug!("Bearer token refreshed by a concurrent caller");
            return Ok(entry.token.clone());
        }

        if !self.credentials.is_complete() {
            return Err(AuthError::MissingCredentials);
        }

        log::debug!(
            "Requesting new bearer token for client {}",
            self.credentials.client_id
        );
        let response = self.provider.request_token(&self.credentials).await?;

        if response.access_token.is_empty() {
            return Err(AuthError::MalformedResponse {
                message: "access_token is empty".to_string(),
            });
        }

        let now = Instant::now();
        let lifetime = effective_lifetime(response.expires_in, self.safety_margin);
        // An unrepresentable deadline collapses to "already expired"
        let expires_at = now.checked_add(lifetime).unwrap_or(now);
        log::debug!("Bearer token cached for {}s", lifetime.as_secs());

        *cached = Some(CachedToken {
            token: response.access_token.clone(),
            expires_at,
        });

        Ok(response.access_token)
    }
}

/// `expires_in - safety_margin`, floored at zero
fn effective_lifetime(expires_in: i64, safety_margin: Duration) -> Duration {
    let ttl = u64::try_from(expires_in).unwrap_or(0);
    Duration::from_secs(ttl).saturating_sub(safety_margin)
}
