//! Google Cloud gateway error types

use cloudbill_core::GatewayError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GcpError {
    #[error("gcloud not found. Please install the Google Cloud CLI: https://cloud.google.com/sdk/docs/install")]
    GcloudNotFound,

    #[error("gcloud command failed: {0}")]
    CommandFailed(String),

    #[error("Google API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Operation {name} failed (code {code}): {message}")]
    OperationFailed {
        name: String,
        code: i32,
        message: String,
    },

    #[error("Operation {name} did not complete after {attempts} polls")]
    OperationTimeout { name: String, attempts: u32 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("YAML parse error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<GcpError> for GatewayError {
    fn from(err: GcpError) -> Self {
        GatewayError::provider(err)
    }
}

pub type Result<T> = std::result::Result<T, GcpError>;
