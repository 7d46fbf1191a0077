//! Service Usage API client
//!
//! Project lookup and service activation. Activation returns a long-running
//! operation that is polled until it reports `done`.

use crate::config::GcpConfig;
use crate::error::{GcpError, Result};
use crate::gcloud::Gcloud;
use crate::http::{ApiClient, Credentials};
use async_trait::async_trait;
use cloudbill_core::{
    EnableServiceRequest, EnableServiceResponse, GatewayResult, RetryConfig, ServiceOperation,
    ServiceUsageGateway,
};
use serde::Deserialize;

/// Service Usage API client
#[derive(Debug, Clone)]
pub struct ServiceUsageClient {
    api: ApiClient,
    endpoint: String,
    project_id: Option<String>,
    gcloud: Gcloud,
    poll: RetryConfig,
}

impl ServiceUsageClient {
    pub fn new(config: &GcpConfig) -> Self {
        Self {
            api: ApiClient::new(Credentials::from_config(config)),
            endpoint: config.service_usage_endpoint.trim_end_matches('/').to_string(),
            project_id: config.project_id.clone(),
            gcloud: Gcloud::default(),
            poll: config.operation_poll.clone(),
        }
    }

    /// Configured project, else the active gcloud project
    pub async fn lookup_project_id(&self) -> Result<Option<String>> {
        if let Some(project_id) = &self.project_id {
            return Ok(Some(project_id.clone()));
        }
        self.gcloud.project_id().await
    }

    /// Submit `POST v1/{name}:enable`
    pub async fn submit_enable(&self, request: &EnableServiceRequest) -> Result<EnableOperation> {
        let url = format!("{}/v1/{}:enable", self.endpoint, request.name);
        let operation: Operation = self.api.post(&url, &serde_json::json!({})).await?;

        tracing::debug!(
            "Enable operation {} submitted (done: {})",
            operation.name,
            operation.done
        );

        Ok(EnableOperation {
            api: self.api.clone(),
            endpoint: self.endpoint.clone(),
            poll: self.poll.clone(),
            operation,
        })
    }
}

#[async_trait]
impl ServiceUsageGateway for ServiceUsageClient {
    type Operation = EnableOperation;

    async fn project_id(&self) -> GatewayResult<Option<String>> {
        Ok(self.lookup_project_id().await?)
    }

    async fn enable_service(&self, request: EnableServiceRequest) -> GatewayResult<EnableOperation> {
        Ok(self.submit_enable(&request).await?)
    }
}

/// Pending enable-service operation
#[derive(Debug)]
pub struct EnableOperation {
    api: ApiClient,
    endpoint: String,
    poll: RetryConfig,
    operation: Operation,
}

impl EnableOperation {
    /// Operation resource name (`operations/...`)
    pub fn name(&self) -> &str {
        &self.operation.name
    }

    /// Poll until done, backing off between polls
    pub async fn settle(mut self) -> Result<EnableServiceResponse> {
        let mut attempt = 0;
        while !self.operation.done {
            if attempt >= self.poll.max_attempts {
                return Err(GcpError::OperationTimeout {
                    name: self.operation.name,
                    attempts: attempt,
                });
            }
            tokio::time::sleep(self.poll.delay_for(attempt)).await;

            let url = format!("{}/v1/{}", self.endpoint, self.operation.name);
            self.operation = self.api.get(&url, &[]).await?;
            attempt += 1;
        }

        let Operation {
            name,
            error,
            response,
            ..
        } = self.operation;

        if let Some(status) = error {
            return Err(GcpError::OperationFailed {
                name,
                code: status.code,
                message: status.message,
            });
        }

        tracing::debug!("Operation {} completed after {} polls", name, attempt);
        Ok(response.unwrap_or_default())
    }
}

#[async_trait]
impl ServiceOperation for EnableOperation {
    async fn wait(self) -> GatewayResult<EnableServiceResponse> {
        Ok(self.settle().await?)
    }
}

// ============ API Types ============

/// `google.longrunning.Operation`
#[derive(Debug, Clone, Deserialize)]
struct Operation {
    #[serde(default)]
    name: String,
    #[serde(default)]
    done: bool,
    #[serde(default)]
    error: Option<Status>,
    #[serde(default)]
    response: Option<EnableServiceResponse>,
}

/// `google.rpc.Status`
#[derive(Debug, Clone, Deserialize)]
struct Status {
    #[serde(default)]
    code: i32,
    #[serde(default)]
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloudbill_core::ServiceState;

    #[test]
    fn test_decode_done_operation() {
        let op: Operation = serde_json::from_str(
            r#"{
                "name": "operations/acf.p2-123",
                "done": true,
                "response": {
                    "@type": "type.googleapis.com/google.api.serviceusage.v1.EnableServiceResponse",
                    "service": {
                        "name": "projects/123/services/cloudbilling.googleapis.com",
                        "parent": "projects/123",
                        "state": "ENABLED"
                    }
                }
            }"#,
        )
        .unwrap();
        assert!(op.done);
        let service = op.response.unwrap().service.unwrap();
        assert_eq!(service.state, ServiceState::Enabled);
    }

    #[test]
    fn test_decode_pending_operation() {
        let op: Operation =
            serde_json::from_str(r#"{"name": "operations/acf.p2-456"}"#).unwrap();
        assert!(!op.done);
        assert!(op.response.is_none());
        assert!(op.error.is_none());
    }

    #[test]
    fn test_client_trims_endpoint() {
        let config = GcpConfig::default().with_endpoint("http://localhost:8080/");
        let client = ServiceUsageClient::new(&config);
        assert_eq!(client.endpoint, "http://localhost:8080");
    }
}
