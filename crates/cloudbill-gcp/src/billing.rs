//! Cloud Billing API client

use crate::config::GcpConfig;
use crate::error::Result;
use crate::http::{ApiClient, Credentials};
use async_trait::async_trait;
use cloudbill_core::{
    BillingGateway, GatewayResult, ListBillingAccountsRequest, ListBillingAccountsResponse,
};

/// Cloud Billing API client
#[derive(Debug, Clone)]
pub struct CloudBillingClient {
    api: ApiClient,
    endpoint: String,
}

impl CloudBillingClient {
    pub fn new(config: &GcpConfig) -> Self {
        Self {
            api: ApiClient::new(Credentials::from_config(config)),
            endpoint: config.billing_endpoint.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch a single page of the billing accounts visible to the caller
    pub async fn list_accounts(&self, page_size: u32) -> Result<ListBillingAccountsResponse> {
        let url = format!("{}/v1/billingAccounts", self.endpoint);
        let response: ListBillingAccountsResponse = self
            .api
            .get(&url, &[("pageSize", page_size.to_string())])
            .await?;

        tracing::debug!(
            "Listed {} billing account(s)",
            response.billing_accounts.len()
        );
        Ok(response)
    }
}

#[async_trait]
impl BillingGateway for CloudBillingClient {
    async fn list_billing_accounts(
        &self,
        request: ListBillingAccountsRequest,
    ) -> GatewayResult<ListBillingAccountsResponse> {
        Ok(self.list_accounts(request.page_size).await?)
    }
}
