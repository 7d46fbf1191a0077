//! Google Cloud entry points for the bootstrap steps

use crate::billing::CloudBillingClient;
use crate::config::GcpConfig;
use crate::service_usage::ServiceUsageClient;
use cloudbill_core::{BillingSession, Bootstrap, Result, validate_master_account_exists};

pub type GcpBillingSession = BillingSession<CloudBillingClient>;

/// Bootstrap wired to the Service Usage API
pub fn service_bootstrap(config: &GcpConfig) -> Bootstrap<ServiceUsageClient> {
    Bootstrap::new(ServiceUsageClient::new(config))
}

/// Enable the Cloud Billing API and check for a master billing account
pub async fn initialize_billing(
    config: &GcpConfig,
    project_id: Option<&str>,
) -> Result<GcpBillingSession> {
    service_bootstrap(config)
        .initialize(project_id, || CloudBillingClient::new(config))
        .await
}

/// Enable `service_name` on the project
pub async fn enable_service(
    config: &GcpConfig,
    service_name: &str,
    project_id: Option<&str>,
) -> Result<()> {
    service_bootstrap(config).enable_service(service_name, project_id).await
}

/// Check for a master billing account
///
/// A client is built from `config` when none is given.
pub async fn validate_billing_account(
    config: &GcpConfig,
    client: Option<&CloudBillingClient>,
) -> Result<()> {
    match client {
        Some(client) => validate_master_account_exists(client).await,
        None => validate_master_account_exists(&CloudBillingClient::new(config)).await,
    }
}
