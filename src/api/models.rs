use serde::{Deserialize, Serialize};

// Authentication models
#[derive(Debug, Deserialize, Clone)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    /// Lifetime in seconds as reported by the token endpoint
    pub expires_in: i64,
}

// Shared response envelope parts
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ApiErrorEntry {
    pub code: i64,
    pub message: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct ResponseMeta {
    #[serde(default)]
    pub query_time: Option<f64>,
    #[serde(default)]
    pub powered_by: Option<String>,
    #[serde(default)]
    pub trace_id: Option<String>,
}

// Host models
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct HostsResponse {
    #[serde(default)]
    pub resources: Vec<String>,
    #[serde(default)]
    pub errors: Vec<ApiErrorEntry>,
    #[serde(default)]
    pub meta: ResponseMeta,
}
