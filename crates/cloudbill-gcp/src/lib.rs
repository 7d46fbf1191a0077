//! Google Cloud gateways for cloudbill
//!
//! Implements the cloudbill-core gateway traits on top of the Service Usage
//! and Cloud Billing REST APIs.
//!
//! # Requirements
//!
//! - An access token in `GOOGLE_OAUTH_ACCESS_TOKEN`, or the `gcloud` CLI
//!   installed and logged in
//! - A project in `GOOGLE_CLOUD_PROJECT` (or the config file), or one selected
//!   with `gcloud config set project`
//!
//! # Example
//!
//! ```ignore
//! use cloudbill_gcp::{GcpConfig, initialize_billing};
//!
//! let config = GcpConfig::load()?;
//! let session = initialize_billing(&config, None).await?;
//! let accounts = session.list_accounts(10).await?;
//! ```

pub mod billing;
pub mod bootstrap;
pub mod config;
pub mod error;
pub mod gcloud;
pub mod http;
pub mod service_usage;

pub use billing::CloudBillingClient;
pub use bootstrap::{
    GcpBillingSession, enable_service, initialize_billing, service_bootstrap, validate_billing_account,
};
pub use config::{GcpConfig, find_config_file};
pub use error::{GcpError, Result};
pub use gcloud::Gcloud;
pub use http::Credentials;
pub use service_usage::{EnableOperation, ServiceUsageClient};
