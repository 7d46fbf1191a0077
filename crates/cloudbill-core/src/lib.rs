//! cloudbill core
//!
//! Provider-neutral steps that prepare a cloud project for billing-aware
//! operation: resolve the project, enable the billing API, and make sure an
//! open master billing account exists.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                   Bootstrap                      │
//! │   initialize() ─► ServiceActivator ─► validator  │
//! └───────┬─────────────────────────┬───────────────┘
//!         │                         │
//! ┌───────▼──────────────┐ ┌────────▼─────────────┐
//! │ ServiceUsageGateway  │ │   BillingGateway     │
//! │  project_id()        │ │  list_billing_       │
//! │  enable_service()    │ │    accounts()        │
//! └──────────────────────┘ └──────────────────────┘
//!         ▲ implemented by a provider crate (cloudbill-gcp)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use cloudbill_core::Bootstrap;
//!
//! let bootstrap = Bootstrap::new(service_usage);
//! let session = bootstrap.initialize(None, || billing_client).await?;
//! ```

pub mod activator;
pub mod bootstrap;
pub mod error;
pub mod gateway;
pub mod model;
pub mod resolver;
pub mod validator;

// Re-exports
pub use activator::{ServiceActivator, verify_activation};
pub use bootstrap::{BillingSession, Bootstrap, CLOUD_BILLING_API};
pub use error::{BootstrapError, GatewayError, MANAGE_BILLING_ACCOUNT_URL, Result};
pub use gateway::{BillingGateway, GatewayResult, RetryConfig, ServiceOperation, ServiceUsageGateway};
pub use model::{
    BillingAccount, EnableServiceRequest, EnableServiceResponse, ListBillingAccountsRequest,
    ListBillingAccountsResponse, ServiceRecord, ServiceState, service_resource_name,
};
pub use resolver::resolve_project_id;
pub use validator::{PROBE_PAGE_SIZE, find_open_master, validate_master_account_exists};
