//! Project identifier resolution

use crate::error::{BootstrapError, Result};
use crate::gateway::ServiceUsageGateway;

/// Resolve the active project identifier through the gateway
///
/// The gateway is asked exactly once. An absent or empty answer is
/// [`BootstrapError::IdentifierUnavailable`].
pub async fn resolve_project_id<S: ServiceUsageGateway>(gateway: &S) -> Result<String> {
    match gateway.project_id().await? {
        Some(project_id) if !project_id.is_empty() => {
            tracing::debug!("Resolved project identifier: {}", project_id);
            Ok(project_id)
        }
        _ => Err(BootstrapError::IdentifierUnavailable),
    }
}
