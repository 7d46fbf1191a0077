//! Gateway configuration
//!
//! Values are layered, highest priority first:
//! 1. explicit overrides (`with_project`, `with_access_token`)
//! 2. environment variables
//! 3. the YAML config file (`CLOUDBILL_CONFIG_PATH` or `~/.config/cloudbill/config.yaml`)
//! 4. built-in defaults

use crate::error::{GcpError, Result};
use cloudbill_core::RetryConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_SERVICE_USAGE_ENDPOINT: &str = "https://serviceusage.googleapis.com";
pub const DEFAULT_BILLING_ENDPOINT: &str = "https://cloudbilling.googleapis.com";

/// Checked in order; the first non-empty one wins
const PROJECT_ENV_VARS: [&str; 3] = [
    "GOOGLE_CLOUD_PROJECT",
    "GCLOUD_PROJECT",
    "CLOUDSDK_CORE_PROJECT",
];
const ACCESS_TOKEN_ENV: &str = "GOOGLE_OAUTH_ACCESS_TOKEN";
const SERVICE_USAGE_ENDPOINT_ENV: &str = "CLOUDBILL_SERVICE_USAGE_ENDPOINT";
const BILLING_ENDPOINT_ENV: &str = "CLOUDBILL_BILLING_ENDPOINT";
const CONFIG_PATH_ENV: &str = "CLOUDBILL_CONFIG_PATH";

/// Configuration shared by the Google Cloud gateways
#[derive(Clone, PartialEq)]
pub struct GcpConfig {
    /// Project to operate on; looked up through gcloud when unset
    pub project_id: Option<String>,

    /// OAuth access token; obtained through gcloud when unset
    pub access_token: Option<String>,

    pub service_usage_endpoint: String,

    pub billing_endpoint: String,

    /// Polling schedule for long-running operations
    pub operation_poll: RetryConfig,
}

impl std::fmt::Debug for GcpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GcpConfig")
            .field("project_id", &self.project_id)
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .field("service_usage_endpoint", &self.service_usage_endpoint)
            .field("billing_endpoint", &self.billing_endpoint)
            .field("operation_poll", &self.operation_poll)
            .finish()
    }
}

impl Default for GcpConfig {
    fn default() -> Self {
        Self {
            project_id: None,
            access_token: None,
            service_usage_endpoint: DEFAULT_SERVICE_USAGE_ENDPOINT.to_string(),
            billing_endpoint: DEFAULT_BILLING_ENDPOINT.to_string(),
            operation_poll: RetryConfig::default(),
        }
    }
}

impl GcpConfig {
    /// Defaults overlaid with environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Defaults, then the config file if one exists, then environment variables
    pub fn load() -> Result<Self> {
        let mut config = Self::default();
        if let Some(path) = find_config_file() {
            tracing::debug!("Loading config file: {}", path.display());
            config.apply_file(ConfigFile::read(&path)?)?;
        }
        config.apply_env();
        Ok(config)
    }

    pub fn with_project(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Point both gateways at one base URL (used against local test servers)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        self.service_usage_endpoint = endpoint.clone();
        self.billing_endpoint = endpoint;
        self
    }

    pub fn with_operation_poll(mut self, poll: RetryConfig) -> Self {
        self.operation_poll = poll;
        self
    }

    fn apply_env(&mut self) {
        if let Some(project) = PROJECT_ENV_VARS.iter().find_map(|name| non_empty_env(name)) {
            self.project_id = Some(project);
        }
        if let Some(token) = non_empty_env(ACCESS_TOKEN_ENV) {
            self.access_token = Some(token);
        }
        if let Some(endpoint) = non_empty_env(SERVICE_USAGE_ENDPOINT_ENV) {
            self.service_usage_endpoint = endpoint;
        }
        if let Some(endpoint) = non_empty_env(BILLING_ENDPOINT_ENV) {
            self.billing_endpoint = endpoint;
        }
    }

    fn apply_file(&mut self, file: ConfigFile) -> Result<()> {
        if let Some(project) = file.project {
            self.project_id = Some(project);
        }
        if let Some(endpoint) = file.service_usage_endpoint {
            self.service_usage_endpoint = endpoint;
        }
        if let Some(endpoint) = file.billing_endpoint {
            self.billing_endpoint = endpoint;
        }
        if let Some(poll) = file.operation_poll {
            let retry = &mut self.operation_poll;
            if let Some(attempts) = poll.max_attempts {
                retry.max_attempts = attempts;
            }
            if let Some(ms) = poll.initial_delay_ms {
                retry.initial_delay = Duration::from_millis(ms);
            }
            if let Some(ms) = poll.max_delay_ms {
                retry.max_delay = Duration::from_millis(ms);
            }
            if let Some(multiplier) = poll.backoff_multiplier {
                if !multiplier.is_finite() || multiplier < 1.0 {
                    return Err(GcpError::InvalidConfig(format!(
                        "operation_poll.backoff_multiplier must be a finite number >= 1.0, got {}",
                        multiplier
                    )));
                }
                retry.backoff_multiplier = multiplier;
            }
        }
        Ok(())
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Locate the config file
///
/// 1. `CLOUDBILL_CONFIG_PATH`
/// 2. `~/.config/cloudbill/config.yaml`
pub fn find_config_file() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        let path = PathBuf::from(path);
        if path.exists() {
            return Some(path);
        }
        tracing::warn!("{} points at a missing file: {}", CONFIG_PATH_ENV, path.display());
    }

    let global = dirs::config_dir()?.join("cloudbill").join("config.yaml");
    global.exists().then_some(global)
}

/// On-disk configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub project: Option<String>,
    pub service_usage_endpoint: Option<String>,
    pub billing_endpoint: Option<String>,
    pub operation_poll: Option<PollSettings>,
}

impl ConfigFile {
    pub fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(&content)?)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PollSettings {
    pub max_attempts: Option<u32>,
    pub initial_delay_ms: Option<u64>,
    pub max_delay_ms: Option<u64>,
    pub backoff_multiplier: Option<f64>,
}
