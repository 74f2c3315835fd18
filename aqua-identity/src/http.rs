//! REST client for the identity backend.
//!
//! Two endpoints, both `POST` with a JSON body:
//!
//! - `{base}/auth/reset-password`  `{"email": "..."}`
//! - `{base}/auth/update-password` `{"new_password": "..."}`
//!
//! Any 2xx status is success. A non-2xx response is expected to carry an
//! error envelope `{"error": {"message": "..."}}`; when it does not, the
//! HTTP status text is used as the reason.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use aqua_core::{IdentityError, IdentityService};

const RESET_PATH: &str = "auth/reset-password";
const UPDATE_PATH: &str = "auth/update-password";

/// Connection settings for the identity backend.
#[derive(Debug, Clone)]
pub struct IdentityConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            base_url: "https://identity.example.com".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// `IdentityService` over HTTP.
pub struct HttpIdentityService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpIdentityService {
    /// Builds the client from the given config.
    pub fn new(config: &IdentityConfig) -> Result<Self, IdentityError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| IdentityError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn post_json(&self, path: &str, body: serde_json::Value) -> Result<(), IdentityError> {
        let url = self.endpoint(path);
        debug!(%url, "identity request");

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| IdentityError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let text = response
            .text()
            .await
            .map_err(|e| IdentityError::InvalidResponse(e.to_string()))?;

        Err(IdentityError::Service {
            message: extract_reason(status, &text),
        })
    }
}

/// Pulls the backend's reason out of an error response body, falling back to
/// the HTTP status text for bodies we cannot parse.
fn extract_reason(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string(),
    }
}

#[async_trait]
impl IdentityService for HttpIdentityService {
    async fn reset_password(&self, email: &str) -> Result<(), IdentityError> {
        self.post_json(RESET_PATH, json!({ "email": email })).await
    }

    async fn update_password(&self, new_password: &str) -> Result<(), IdentityError> {
        self.post_json(UPDATE_PATH, json!({ "new_password": new_password }))
            .await
    }
}
