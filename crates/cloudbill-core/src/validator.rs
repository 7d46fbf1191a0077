//! Master billing account validation

use crate::error::{BootstrapError, Result};
use crate::gateway::BillingGateway;
use crate::model::{BillingAccount, ListBillingAccountsRequest};

/// Page size of the existence probe
///
/// Only the first page is examined. An open master account that the provider
/// lists after the first page is not seen.
pub const PROBE_PAGE_SIZE: u32 = 1;

/// Ensure at least one open master billing account is visible
pub async fn validate_master_account_exists<B: BillingGateway + ?Sized>(
    billing: &B,
) -> Result<()> {
    let response = billing
        .list_billing_accounts(ListBillingAccountsRequest::new(PROBE_PAGE_SIZE))
        .await?;

    match find_open_master(&response.billing_accounts) {
        Some(account) => {
            tracing::info!("Found master billing account: {}", account.name);
            Ok(())
        }
        None => {
            tracing::warn!(
                "No open master billing account among {} listed",
                response.billing_accounts.len()
            );
            Err(BootstrapError::NoMasterBillingAccount)
        }
    }
}

/// First account, in listing order, that is open and not a sub-account
pub fn find_open_master(accounts: &[BillingAccount]) -> Option<&BillingAccount> {
    accounts.iter().find(|account| account.is_open_master())
}
