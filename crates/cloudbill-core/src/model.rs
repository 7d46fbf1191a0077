//! Request and response shapes exchanged with the gateways

use serde::{Deserialize, Serialize};

/// Request to enable a service on a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnableServiceRequest {
    /// Fully qualified resource name: `projects/{project}/services/{service}`
    pub name: String,
}

impl EnableServiceRequest {
    pub fn new(project_id: &str, service_name: &str) -> Self {
        Self {
            name: service_resource_name(project_id, service_name),
        }
    }
}

/// Build the resource name of a service on a project
pub fn service_resource_name(project_id: &str, service_name: &str) -> String {
    format!("projects/{}/services/{}", project_id, service_name)
}

/// Settled result of an enable-service operation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnableServiceResponse {
    /// The service record, if the provider returned one
    #[serde(default)]
    pub service: Option<ServiceRecord>,
}

/// Service record returned after activation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRecord {
    /// Resource name (`projects/{project}/services/{service}`)
    #[serde(default)]
    pub name: Option<String>,

    /// Owning resource (`projects/{project}`)
    #[serde(default)]
    pub parent: Option<String>,

    /// Activation state
    #[serde(default)]
    pub state: ServiceState,
}

impl ServiceRecord {
    pub fn new(name: impl Into<String>, state: ServiceState) -> Self {
        Self {
            name: Some(name.into()),
            parent: None,
            state,
        }
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Whether the record names `service_name`, ignoring ASCII case
    pub fn names_service(&self, service_name: &str) -> bool {
        self.name.as_deref().is_some_and(|name| {
            name.to_ascii_lowercase()
                .ends_with(&service_name.to_ascii_lowercase())
        })
    }
}

/// Activation state of a service
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceState {
    /// Activation is still in progress
    Enabling,
    /// Service is enabled
    Enabled,
    /// Service is disabled
    Disabled,
    /// State unknown or not reported
    #[default]
    #[serde(rename = "STATE_UNSPECIFIED", alias = "UNSPECIFIED")]
    #[serde(other)]
    Unspecified,
}

impl std::fmt::Display for ServiceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceState::Unspecified => write!(f, "STATE_UNSPECIFIED"),
            ServiceState::Enabling => write!(f, "ENABLING"),
            ServiceState::Enabled => write!(f, "ENABLED"),
            ServiceState::Disabled => write!(f, "DISABLED"),
        }
    }
}

/// Request for one page of billing accounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBillingAccountsRequest {
    pub page_size: u32,
}

impl ListBillingAccountsRequest {
    pub fn new(page_size: u32) -> Self {
        Self { page_size }
    }
}

/// One page of billing accounts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBillingAccountsResponse {
    #[serde(default)]
    pub billing_accounts: Vec<BillingAccount>,

    /// Present when more pages exist; never followed here
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// Billing account as reported by the billing gateway
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingAccount {
    /// Resource name (`billingAccounts/{id}`)
    pub name: String,

    /// Whether the account can currently be charged
    #[serde(default)]
    pub open: bool,

    #[serde(default)]
    pub display_name: Option<String>,

    /// Master account this account is a sub-account of
    #[serde(default)]
    pub master_billing_account: Option<String>,

    #[serde(default)]
    pub parent: Option<String>,
}

impl BillingAccount {
    pub fn new(name: impl Into<String>, open: bool) -> Self {
        Self {
            name: name.into(),
            open,
            ..Default::default()
        }
    }

    pub fn with_master(mut self, master: impl Into<String>) -> Self {
        self.master_billing_account = Some(master.into());
        self
    }

    /// Master accounts carry no (or an empty) master reference
    pub fn is_master(&self) -> bool {
        self.master_billing_account
            .as_deref()
            .is_none_or(str::is_empty)
    }

    /// Open master accounts are the ones a project can be billed to
    pub fn is_open_master(&self) -> bool {
        self.open && self.is_master()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_resource_name() {
        let req = EnableServiceRequest::new("proj-1", "billing.example.com");
        assert_eq!(req.name, "projects/proj-1/services/billing.example.com");
    }

    #[test]
    fn test_names_service_ignores_case() {
        let record = ServiceRecord::new(
            "projects/p/services/CloudBilling.GoogleAPIs.com",
            ServiceState::Enabled,
        );
        assert!(record.names_service("cloudbilling.googleapis.com"));
        assert!(!record.names_service("compute.googleapis.com"));
        assert!(!ServiceRecord::default().names_service("cloudbilling.googleapis.com"));
    }

    #[test]
    fn test_service_state_decoding() {
        let record: ServiceRecord = serde_json::from_str(
            r#"{"name":"projects/p/services/s","parent":"projects/123","state":"ENABLED"}"#,
        )
        .unwrap();
        assert_eq!(record.state, ServiceState::Enabled);
        assert_eq!(record.parent.as_deref(), Some("projects/123"));

        let record: ServiceRecord =
            serde_json::from_str(r#"{"state":"STATE_UNSPECIFIED"}"#).unwrap();
        assert_eq!(record.state, ServiceState::Unspecified);

        let record: ServiceRecord = serde_json::from_str(r#"{"state":"UNSPECIFIED"}"#).unwrap();
        assert_eq!(record.state, ServiceState::Unspecified);

        let record: ServiceRecord = serde_json::from_str(r#"{"state":"SOMETHING_NEW"}"#).unwrap();
        assert_eq!(record.state, ServiceState::Unspecified);

        let record: ServiceRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record.state, ServiceState::Unspecified);
        assert!(record.name.is_none());
    }

    #[test]
    fn test_enable_response_without_service() {
        let resp: EnableServiceResponse = serde_json::from_str(
            r#"{"@type":"type.googleapis.com/google.api.serviceusage.v1.EnableServiceResponse"}"#,
        )
        .unwrap();
        assert!(resp.service.is_none());
    }

    #[test]
    fn test_billing_account_master_detection() {
        assert!(BillingAccount::new("billingAccounts/a", true).is_open_master());
        assert!(
            BillingAccount::new("billingAccounts/b", true)
                .with_master("")
                .is_open_master()
        );
        assert!(
            !BillingAccount::new("billingAccounts/c", true)
                .with_master("billingAccounts/x")
                .is_open_master()
        );
        assert!(!BillingAccount::new("billingAccounts/d", false).is_open_master());
    }

    #[test]
    fn test_list_response_decoding() {
        let resp: ListBillingAccountsResponse = serde_json::from_str(
            r#"{
                "billingAccounts": [{
                    "name": "billingAccounts/012345-567890-ABCDEF",
                    "open": true,
                    "displayName": "Main",
                    "masterBillingAccount": ""
                }],
                "nextPageToken": "abc"
            }"#,
        )
        .unwrap();
        assert_eq!(resp.billing_accounts.len(), 1);
        assert!(resp.billing_accounts[0].is_open_master());
        assert_eq!(resp.next_page_token.as_deref(), Some("abc"));
    }
}
