use crate::api::auth::TokenManager;
use crate::api::regions;
use crate::error::ApiError;
use crate::utils::error_helpers::{convert_json_error, convert_request_error};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
const USER_AGENT: &str = concat!("falcon-cli/", env!("CARGO_PKG_VERSION"));

const GET_SUCCESS: &[u16] = &[200, 201, 202];
const POST_SUCCESS: &[u16] = &[200, 201];

/// Authenticated client for the Falcon REST API
#[derive(Clone)]
pub struct FalconClient {
    client: Client,
    pub base_url: String,
    tokens: Arc<TokenManager>,
}

impl FalconClient {
    /// Client for the region configured in the token manager's credentials
    pub async fn new(tokens: Arc<TokenManager>) -> crate::Result<Self> {
        let base_url = regions::base_url_for(&tokens.credentials().cloud_region)?;
        Self::with_base_url(base_url.to_string(), tokens).await
    }

    /// Client for an explicit base URL
    ///
    /// Fetches a token up front so credential problems surface before any
    /// resource request is attempted.
    pub async fn with_base_url(base_url: String, tokens: Arc<TokenManager>) -> crate::Result<Self> {
        tokens.get_token().await?;

        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| convert_request_error(e, "client_init"))?;

        Ok(FalconClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            tokens,
        })
    }

    pub fn build_request(&self, method: Method, path: &str, token: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .request(method, url)
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", token))
    }

    /// Authenticated GET; `query` is appended only when non-empty
    pub async fn get(&self, path: &str, query: &[(&str, &str)]) -> crate::Result<Response> {
        let token = self.tokens.get_token().await?;

        let mut request = self.build_request(Method::GET, path, &token);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request
            .send()
            .await
            .map_err(|e| convert_request_error(e, path))?;

        Ok(check_status(response, path, GET_SUCCESS).await?)
    }

    /// Authenticated POST with a JSON body
    pub async fn post<B>(&self, path: &str, body: &B) -> crate::Result<Response>
    where
        B: Serialize + ?Sized,
    {
        let token = self.tokens.get_token().await?;

        // .json() sets Content-Type: application/json
        let response = self
            .build_request(Method::POST, path, &token)
            .json(body)
            .send()
            .await
            .map_err(|e| convert_request_error(e, path))?;

        Ok(check_status(response, path, POST_SUCCESS).await?)
    }

    /// Decode a successful response body as JSON, consuming the response
    pub async fn parse_response<T>(response: Response) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let endpoint = response.url().path().to_string();
        let body = response
            .bytes()
            .await
            .map_err(|e| convert_request_error(e, &endpoint))?;

        serde_json::from_slice(&body).map_err(|e| convert_json_error(e, &endpoint))
    }
}

async fn check_status(
    response: Response,
    endpoint: &str,
    accepted: &[u16],
) -> Result<Response, ApiError> {
    let status = response.status().as_u16();
    log::debug!("{} returned {}", endpoint, status);

    if accepted.contains(&status) {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());

    Err(ApiError::NonSuccessStatus {
        status,
        endpoint: endpoint.to_string(),
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::auth::TokenProvider;
    use crate::api::models::TokenResponse;
    use crate::error::{AppError, AuthError};
    use crate::storage::credentials::Credentials;
    use async_trait::async_trait;

    struct StaticToken;

    #[async_trait]
    impl TokenProvider for StaticToken {
        async fn request_token(&self, _: &Credentials) -> Result<TokenResponse, AuthError> {
            Ok(TokenResponse {
                access_token: "static-token".to_string(),
                token_type: Some("bearer".to_string()),
                expires_in: 1799,
            })
        }
    }

    fn token_manager(region: &str) -> Arc<TokenManager> {
        let creds = Credentials::new("id".to_string(), "secret".to_string(), region.to_string());
        Arc::new(TokenManager::new(creds, StaticToken))
    }

    #[tokio::test]
    async fn test_client_creation_resolves_region() {
        let client = FalconClient::new(token_manager("us-2"))
            .await
            .expect("client creation failed");
        assert_eq!(client.base_url, "https://api.us-2.crowdstrike.com");
    }

    #[tokio::test]
    async fn test_client_creation_unknown_region() {
        let result = FalconClient::new(token_manager("nowhere")).await;
        assert!(matches!(
            result,
            Err(AppError::Auth(AuthError::UnknownRegion { .. }))
        ));
    }

    #[tokio::test]
    async fn test_client_creation_missing_credentials() {
        let creds = Credentials::new(String::new(), String::new(), "us-1".to_string());
        let tokens = Arc::new(TokenManager::new(creds, StaticToken));
        let result = FalconClient::new(tokens).await;
        assert!(matches!(
            result,
            Err(AppError::Auth(AuthError::MissingCredentials))
        ));
    }

    #[tokio::test]
    async fn test_base_url_trailing_slash_removed() {
        let client = FalconClient::with_base_url("http://example.test/".to_string(), token_manager("us-1"))
            .await
            .expect("client creation failed");
        assert_eq!(client.base_url, "http://example.test");
    }

    #[tokio::test]
    async fn test_build_request_headers() {
        let client = FalconClient::with_base_url("http://example.test".to_string(), token_manager("us-1"))
            .await
            .expect("client creation failed");

        let request = client
            .build_request(Method::GET, "/devices/queries/devices/v1", "abc")
            .build()
            .expect("Failed to build request");

        assert_eq!(
            request.url().as_str(),
            "http://example.test/devices/queries/devices/v1"
        );
        assert_eq!(request.method(), Method::GET);
        assert_eq!(
            request.headers().get(AUTHORIZATION).unwrap().to_str().unwrap(),
            "Bearer abc"
        );
        assert_eq!(
            request.headers().get(ACCEPT).unwrap().to_str().unwrap(),
            "application/json"
        );
    }
}
