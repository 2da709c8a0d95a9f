//! Falcon API client credentials
//!
//! Credentials come from the `falcon` section of the config file and may be
//! overridden per invocation by CLI flags or the `FALCON_CLIENT_ID`,
//! `FALCON_CLIENT_SECRET` and `FALCON_CLOUD_REGION` environment variables.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Credentials {
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub client_secret: String,
    #[serde(default)]
    pub cloud_region: String,
}

impl Credentials {
    pub fn new(client_id: String, client_secret: String, cloud_region: String) -> Self {
        Self {
            client_id,
            client_secret,
            cloud_region,
        }
    }

    /// Both halves of the client credential pair are present
    pub fn is_complete(&self) -> bool {
        !self.client_id.is_empty() && !self.client_secret.is_empty()
    }

    /// Apply non-empty overrides on top of the stored values
    pub fn with_overrides(
        mut self,
        client_id: Option<String>,
        client_secret: Option<String>,
        cloud_region: Option<String>,
    ) -> Self {
        if let Some(id) = client_id.filter(|v| !v.is_empty()) {
            self.client_id = id;
        }
        if let Some(secret) = client_secret.filter(|v| !v.is_empty()) {
            self.client_secret = secret;
        }
        if let Some(region) = cloud_region.filter(|v| !v.is_empty()) {
            self.cloud_region = region;
        }
        self
    }

    pub fn masked_secret(&self) -> String {
        mask_secret(&self.client_secret)
    }
}

// Keep secrets out of debug output and logs
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &self.masked_secret())
            .field("cloud_region", &self.cloud_region)
            .finish()
    }
}

pub fn mask_secret(secret: &str) -> String {
    if secret.is_empty() {
        "(not set)".to_string()
    } else if secret.len() > 8 && secret.is_ascii() {
        format!("{}...{}", &secret[..4], &secret[secret.len() - 4..])
    } else {
        "*****".to_string()
    }
}
