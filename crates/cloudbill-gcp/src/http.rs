//! Authenticated JSON calls against Google REST APIs

use crate::config::GcpConfig;
use crate::error::{GcpError, Result};
use crate::gcloud::Gcloud;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Where bearer tokens come from
#[derive(Clone)]
pub enum Credentials {
    /// A fixed OAuth access token
    AccessToken(String),
    /// Ask gcloud on every call
    Gcloud(Gcloud),
}

impl Credentials {
    pub fn from_config(config: &GcpConfig) -> Self {
        match &config.access_token {
            Some(token) => Credentials::AccessToken(token.clone()),
            None => Credentials::Gcloud(Gcloud::default()),
        }
    }

    pub async fn access_token(&self) -> Result<String> {
        match self {
            Credentials::AccessToken(token) => Ok(token.clone()),
            Credentials::Gcloud(gcloud) => gcloud.access_token().await,
        }
    }
}

// Never print the token itself
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credentials::AccessToken(_) => f.write_str("AccessToken(<redacted>)"),
            Credentials::Gcloud(gcloud) => f.debug_tuple("Gcloud").field(gcloud).finish(),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct ApiClient {
    http: reqwest::Client,
    credentials: Arc<Credentials>,
}

impl ApiClient {
    pub(crate) fn new(credentials: Credentials) -> Self {
        Self {
            http: reqwest::Client::new(),
            credentials: Arc::new(credentials),
        }
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        tracing::debug!("GET {}", url);
        self.send(self.http.get(url).query(query)).await
    }

    pub(crate) async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T> {
        tracing::debug!("POST {}", url);
        self.send(self.http.post(url).json(body)).await
    }

    async fn send<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T> {
        let token = self.credentials.access_token().await?;
        let response = request.bearer_auth(token).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(api_error(status.as_u16(), &body));
        }

        Ok(response.json().await?)
    }
}

/// Decode Google's `{"error": {...}}` body, falling back to the raw text
fn api_error(status: u16, body: &str) -> GcpError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|b| match b.error.status {
            Some(code) => format!("{}: {}", code, b.error.message),
            None => b.error.message,
        })
        .unwrap_or_else(|_| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                "Unknown error".to_string()
            } else {
                trimmed.to_string()
            }
        });
    GcpError::Api { status, message }
}

// ============ API Types ============

#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, serde::Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: Option<String>,
}
