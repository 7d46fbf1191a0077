//! Service activation

use crate::error::{BootstrapError, Result};
use crate::gateway::{ServiceOperation, ServiceUsageGateway};
use crate::model::{EnableServiceRequest, EnableServiceResponse, ServiceState};
use crate::resolver::resolve_project_id;

/// Enables services on a project and checks what the provider reports back
pub struct ServiceActivator<'a, S> {
    gateway: &'a S,
}

impl<'a, S: ServiceUsageGateway> ServiceActivator<'a, S> {
    pub fn new(gateway: &'a S) -> Self {
        Self { gateway }
    }

    /// Enable `service_name` on `project_id`
    ///
    /// When `project_id` is `None` or empty the identifier is resolved through
    /// the gateway first. Enabling an already enabled service succeeds the
    /// same way; no pre-check is made.
    pub async fn activate(&self, service_name: &str, project_id: Option<&str>) -> Result<()> {
        let project_id = match project_id {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => resolve_project_id(self.gateway).await?,
        };

        let request = EnableServiceRequest::new(&project_id, service_name);
        tracing::debug!("Enabling service: {}", request.name);

        let operation = self.gateway.enable_service(request.clone()).await?;
        let response = operation.wait().await?;

        verify_activation(service_name, &request, &response)?;
        tracing::info!("Service enabled: {}", request.name);
        Ok(())
    }
}

/// Check a settled activation against the request that produced it
pub fn verify_activation(
    service_name: &str,
    request: &EnableServiceRequest,
    response: &EnableServiceResponse,
) -> Result<()> {
    let Some(service) = &response.service else {
        tracing::warn!("No service record returned for {}", request.name);
        return Err(BootstrapError::ActivationNotReturned {
            request_name: request.name.clone(),
        });
    };

    if !service.names_service(service_name) {
        tracing::warn!(
            "Service name mismatch: requested {}, got {:?}",
            request.name,
            service.name
        );
        return Err(BootstrapError::ActivationNameMismatch {
            observed: service.name.clone(),
            request_name: request.name.clone(),
        });
    }

    if service.state != ServiceState::Enabled {
        tracing::warn!("Service {} is {}", request.name, service.state);
        return Err(BootstrapError::ActivationNotEnabled {
            request_name: request.name.clone(),
            state: service.state,
        });
    }

    Ok(())
}
