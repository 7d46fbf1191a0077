//! Billing bootstrap orchestration

use crate::activator::ServiceActivator;
use crate::error::Result;
use crate::gateway::{BillingGateway, ServiceUsageGateway};
use crate::validator::validate_master_account_exists;

/// Service that has to be enabled before billing calls can be made
pub const CLOUD_BILLING_API: &str = "cloudbilling.googleapis.com";

/// Billing gateway handle returned by a successful bootstrap
#[derive(Debug, Clone)]
pub struct BillingSession<B> {
    billing: B,
}

impl<B: BillingGateway> BillingSession<B> {
    /// Borrow the billing gateway
    pub fn gateway(&self) -> &B {
        &self.billing
    }

    /// Take the billing gateway out of the session
    pub fn into_inner(self) -> B {
        self.billing
    }
}

impl<B> std::ops::Deref for BillingSession<B> {
    type Target = B;

    fn deref(&self) -> &B {
        &self.billing
    }
}

/// Prepares a project for billing-aware operation
///
/// Runs strictly in sequence: the billing API is enabled, then a master
/// billing account is looked for. A failed validation leaves the billing API
/// enabled.
pub struct Bootstrap<S> {
    service_usage: S,
}

impl<S: ServiceUsageGateway> Bootstrap<S> {
    pub fn new(service_usage: S) -> Self {
        Self { service_usage }
    }

    pub fn service_usage(&self) -> &S {
        &self.service_usage
    }

    /// Enable `service_name` on the project
    pub async fn enable_service(&self, service_name: &str, project_id: Option<&str>) -> Result<()> {
        ServiceActivator::new(&self.service_usage)
            .activate(service_name, project_id)
            .await
    }

    /// Enable `service_name`, then build an API client for it
    ///
    /// `make_api` is only called once the service is enabled.
    pub async fn initialize_service_api<T, F>(
        &self,
        service_name: &str,
        make_api: F,
        project_id: Option<&str>,
    ) -> Result<T>
    where
        F: FnOnce() -> T,
    {
        self.enable_service(service_name, project_id).await?;
        Ok(make_api())
    }

    /// Enable the billing API and check for a master billing account
    ///
    /// `make_billing` builds the billing gateway once the API is enabled.
    pub async fn initialize<B, F>(
        &self,
        project_id: Option<&str>,
        make_billing: F,
    ) -> Result<BillingSession<B>>
    where
        B: BillingGateway,
        F: FnOnce() -> B,
    {
        let billing = self
            .initialize_service_api(CLOUD_BILLING_API, make_billing, project_id)
            .await?;

        validate_master_account_exists(&billing).await?;
        tracing::info!("Billing bootstrap complete");

        Ok(BillingSession { billing })
    }
}
