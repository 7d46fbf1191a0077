//! In-memory gateways for testing

use async_trait::async_trait;
use cloudbill_core::{
    BillingAccount, BillingGateway, EnableServiceRequest, EnableServiceResponse, GatewayError,
    GatewayResult, ListBillingAccountsRequest, ListBillingAccountsResponse, ServiceOperation,
    ServiceRecord, ServiceState, ServiceUsageGateway,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Service usage gateway with canned answers
#[derive(Debug, Default)]
pub struct MockServiceUsage {
    pub project_id: Option<String>,
    pub response: EnableServiceResponse,
    pub fail_enable: bool,
    pub project_id_calls: AtomicUsize,
    pub enable_calls: AtomicUsize,
    pub wait_calls: Arc<AtomicUsize>,
    pub requests: Mutex<Vec<EnableServiceRequest>>,
}

impl MockServiceUsage {
    pub fn new(project_id: Option<&str>) -> Self {
        Self {
            project_id: project_id.map(str::to_string),
            ..Default::default()
        }
    }

    pub fn responding(mut self, name: &str, state: ServiceState) -> Self {
        self.response = EnableServiceResponse {
            service: Some(ServiceRecord::new(name, state)),
        };
        self
    }

    pub fn failing_enable(mut self) -> Self {
        self.fail_enable = true;
        self
    }

    pub fn project_id_calls(&self) -> usize {
        self.project_id_calls.load(Ordering::SeqCst)
    }

    pub fn enable_calls(&self) -> usize {
        self.enable_calls.load(Ordering::SeqCst)
    }

    pub fn wait_calls(&self) -> usize {
        self.wait_calls.load(Ordering::SeqCst)
    }

    pub fn requested_names(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.name.clone())
            .collect()
    }
}

pub struct MockOperation {
    response: EnableServiceResponse,
    wait_calls: Arc<AtomicUsize>,
}

#[async_trait]
impl ServiceOperation for MockOperation {
    async fn wait(self) -> GatewayResult<EnableServiceResponse> {
        self.wait_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.response)
    }
}

#[async_trait]
impl ServiceUsageGateway for MockServiceUsage {
    type Operation = MockOperation;

    async fn project_id(&self) -> GatewayResult<Option<String>> {
        self.project_id_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.project_id.clone())
    }

    async fn enable_service(
        &self,
        request: EnableServiceRequest,
    ) -> GatewayResult<MockOperation> {
        self.enable_calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request);
        if self.fail_enable {
            return Err(GatewayError::ApiError("permission denied".to_string()));
        }
        Ok(MockOperation {
            response: self.response.clone(),
            wait_calls: Arc::clone(&self.wait_calls),
        })
    }
}

/// Billing gateway with a fixed account list
#[derive(Debug, Default)]
pub struct MockBilling {
    pub accounts: Vec<BillingAccount>,
    pub list_calls: Arc<AtomicUsize>,
    pub page_sizes: Arc<Mutex<Vec<u32>>>,
}

impl MockBilling {
    pub fn new(accounts: Vec<BillingAccount>) -> Self {
        Self {
            accounts,
            ..Default::default()
        }
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BillingGateway for MockBilling {
    async fn list_billing_accounts(
        &self,
        request: ListBillingAccountsRequest,
    ) -> GatewayResult<ListBillingAccountsResponse> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.page_sizes.lock().unwrap().push(request.page_size);
        Ok(ListBillingAccountsResponse {
            billing_accounts: self.accounts.clone(),
            next_page_token: None,
        })
    }
}

/// An open master account
pub fn master_account(id: &str) -> BillingAccount {
    BillingAccount::new(format!("billingAccounts/{}", id), true)
}
