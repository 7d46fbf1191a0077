//! Gateway traits consumed by the bootstrap core
//!
//! A provider crate implements these against its own transport. The core
//! never retries a gateway call and never rewrites a gateway error.

use crate::error::GatewayError;
use crate::model::{
    EnableServiceRequest, EnableServiceResponse, ListBillingAccountsRequest,
    ListBillingAccountsResponse,
};
use async_trait::async_trait;

pub type GatewayResult<T> = std::result::Result<T, GatewayError>;

/// Project identifier lookup and service activation
#[async_trait]
pub trait ServiceUsageGateway: Send + Sync {
    /// Long-running operation returned by [`ServiceUsageGateway::enable_service`]
    type Operation: ServiceOperation;

    /// Look up the ambient project identifier, if the provider knows one
    async fn project_id(&self) -> GatewayResult<Option<String>>;

    /// Submit an activation request
    async fn enable_service(&self, request: EnableServiceRequest)
    -> GatewayResult<Self::Operation>;
}

/// Handle to a submitted activation
#[async_trait]
pub trait ServiceOperation: Send + Sized {
    /// Suspend until the operation settles
    async fn wait(self) -> GatewayResult<EnableServiceResponse>;
}

/// Billing account listing
#[async_trait]
pub trait BillingGateway: Send + Sync {
    async fn list_billing_accounts(
        &self,
        request: ListBillingAccountsRequest,
    ) -> GatewayResult<ListBillingAccountsResponse>;
}

/// Backoff settings for gateways that poll
#[derive(Debug, Clone, PartialEq)]
pub struct RetryConfig {
    /// Maximum number of attempts
    pub max_attempts: u32,

    /// Initial delay between attempts
    pub initial_delay: std::time::Duration,

    /// Maximum delay between attempts
    pub max_delay: std::time::Duration,

    /// Backoff multiplier
    pub backoff_multiplier: f64,
}

impl RetryConfig {
    /// Delay before the given (zero based) attempt, never above `max_delay`
    pub fn delay_for(&self, attempt: u32) -> std::time::Duration {
        let factor = self
            .backoff_multiplier
            .powi(attempt.min(i32::MAX as u32) as i32);
        std::time::Duration::try_from_secs_f64(self.initial_delay.as_secs_f64() * factor)
            .map_or(self.max_delay, |delay| delay.min(self.max_delay))
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 60,
            initial_delay: std::time::Duration::from_secs(1),
            max_delay: std::time::Duration::from_secs(10),
            backoff_multiplier: 1.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_delay_grows_and_caps() {
        let retry = RetryConfig {
            max_attempts: 10,
            initial_delay: Duration::from_millis(100),
            max_delay: Duration::from_millis(350),
            backoff_multiplier: 2.0,
        };
        assert_eq!(retry.delay_for(0), Duration::from_millis(100));
        assert_eq!(retry.delay_for(1), Duration::from_millis(200));
        assert_eq!(retry.delay_for(2), Duration::from_millis(350));
        assert_eq!(retry.delay_for(9), Duration::from_millis(350));
    }

    #[test]
    fn test_delay_never_overflows() {
        let retry = RetryConfig {
            backoff_multiplier: 10.0,
            ..RetryConfig::default()
        };
        assert_eq!(retry.delay_for(59), retry.max_delay);
        assert_eq!(retry.delay_for(u32::MAX), retry.max_delay);

        let retry = RetryConfig {
            backoff_multiplier: -1.5,
            ..RetryConfig::default()
        };
        assert_eq!(retry.delay_for(1), retry.max_delay);

        let retry = RetryConfig {
            backoff_multiplier: f64::NAN,
            ..RetryConfig::default()
        };
        assert_eq!(retry.delay_for(1), retry.max_delay);
    }
}
