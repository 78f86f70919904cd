use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::counter::TokenCounter;
use crate::error::{Result, VertexError};

/// OAuth2 bearer token consumed at client construction. The Python SDK
/// resolves ambient application-default credentials; here the token is
/// exported explicitly (e.g. `gcloud auth print-access-token`).
pub const ACCESS_TOKEN_ENV: &str = "GCP_ACCESS_TOKEN";

/// Client for the Vertex AI `countTokens` endpoint.
pub struct VertexClient {
    http: reqwest::Client,
    base_url: String,
    project: String,
    location: String,
    token: String,
}

impl VertexClient {
    /// Build a client bound to a project and location. Fails when the
    /// token is empty or the HTTP client cannot be constructed.
    pub fn new(
        project: impl Into<String>,
        location: impl Into<String>,
        token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(VertexError::ClientInit(
                "empty OAuth2 access token".to_string(),
            ));
        }

        let http = reqwest::Client::builder()
            .user_agent("tunecost/0.1 (dataset token estimator)")
            .timeout(timeout)
            .build()
            .map_err(|e| VertexError::ClientInit(e.to_string()))?;

        let location = location.into();
        let base_url = format!("https://{location}-aiplatform.googleapis.com");

        Ok(Self {
            http,
            base_url,
            project: project.into(),
            location,
            token,
        })
    }

    /// Build a client with the access token taken from
    /// [`ACCESS_TOKEN_ENV`].
    pub fn from_env(
        project: impl Into<String>,
        location: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let token = std::env::var(ACCESS_TOKEN_ENV)
            .ok()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| {
                VertexError::ClientInit(format!(
                    "{ACCESS_TOKEN_ENV} is not set; export an OAuth2 access token \
                     (e.g. from `gcloud auth print-access-token`)"
                ))
            })?;

        Self::new(project, location, token, timeout)
    }

    /// Override the API origin. Used by tests and private endpoints.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/v1/projects/{}/locations/{}/publishers/google/models/{}:countTokens",
            self.base_url, self.project, self.location, model
        )
    }
}

#[derive(Serialize)]
struct CountTokensRequest {
    contents: Vec<WireContent>,
}

#[derive(Serialize)]
struct WireContent {
    role: &'static str,
    parts: Vec<WirePart>,
}

#[derive(Serialize)]
struct WirePart {
    text: String,
}

#[derive(Deserialize)]
struct CountTokensResponse {
    #[serde(rename = "totalTokens")]
    total_tokens: u64,
}

#[async_trait]
impl TokenCounter for VertexClient {
    async fn count_tokens(&self, model: &str, texts: &[String]) -> Result<u64> {
        // Same shaping the vendor SDK applies to a list of strings: one
        // user content per text, a single part each.
        let body = CountTokensRequest {
            contents: texts
                .iter()
                .map(|text| WireContent {
                    role: "user",
                    parts: vec![WirePart { text: text.clone() }],
                })
                .collect(),
        };

        let response = self
            .http
            .post(self.endpoint(model))
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(VertexError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let decoded: CountTokensResponse = response
            .json()
            .await
            .map_err(|e| VertexError::InvalidResponse(e.to_string()))?;

        Ok(decoded.total_tokens)
    }
}
