//! Bootstrap error types

use crate::model::ServiceState;
use thiserror::Error;

/// Where to send users that have no usable master billing account
pub const MANAGE_BILLING_ACCOUNT_URL: &str =
    "https://cloud.google.com/billing/docs/how-to/manage-billing-account";

/// Faults raised by a gateway implementation
///
/// Concrete providers hand their own error over as [`GatewayError::Provider`]
/// so that callers can still downcast to it.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("{0}")]
    Provider(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl GatewayError {
    pub fn provider(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        GatewayError::Provider(Box::new(err))
    }
}

/// Bootstrap errors
#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("The project identifier could NOT be obtained!")]
    IdentifierUnavailable,

    #[error("The service: {request_name} could NOT be enabled.")]
    ActivationNotReturned { request_name: String },

    #[error(
        "The service name in enableServiceResponse: {} does NOT match the service name in enableServiceRequest: {request_name}!",
        .observed.as_deref().unwrap_or("undefined")
    )]
    ActivationNameMismatch {
        observed: Option<String>,
        request_name: String,
    },

    #[error(
        "The service: {request_name} could NOT be enabled successfully. Current state: {state}."
    )]
    ActivationNotEnabled {
        request_name: String,
        state: ServiceState,
    },

    #[error(
        "Could not locate any master cloud billing accounts. Please follow the instructions on https://cloud.google.com/billing/docs/how-to/manage-billing-account to create a master cloud billing account."
    )]
    NoMasterBillingAccount,

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

pub type Result<T> = std::result::Result<T, BootstrapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_mismatch_message_includes_both_names() {
        let err = BootstrapError::ActivationNameMismatch {
            observed: Some("projects/p/services/other.googleapis.com".to_string()),
            request_name: "projects/p/services/billing.googleapis.com".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("projects/p/services/other.googleapis.com"));
        assert!(msg.contains("projects/p/services/billing.googleapis.com"));
    }

    #[test]
    fn test_name_mismatch_message_without_observed_name() {
        let err = BootstrapError::ActivationNameMismatch {
            observed: None,
            request_name: "projects/p/services/s".to_string(),
        };
        assert!(err.to_string().contains("enableServiceResponse: undefined"));
    }

    #[test]
    fn test_gateway_error_is_not_reworded() {
        let err: BootstrapError = GatewayError::ApiError("quota exceeded".to_string()).into();
        assert_eq!(err.to_string(), "API error: quota exceeded");
    }

    #[test]
    fn test_no_master_account_points_at_docs() {
        let msg = BootstrapError::NoMasterBillingAccount.to_string();
        assert!(msg.contains(MANAGE_BILLING_ACCOUNT_URL));
    }
}
