//! gcloud CLI wrapper
//!
//! Used for the ambient project and credentials when they are not configured
//! explicitly.

use crate::error::{GcpError, Result};
use std::process::Stdio;
use tokio::process::Command;

/// gcloud CLI wrapper
#[derive(Debug, Clone)]
pub struct Gcloud {
    program: String,
}

impl Default for Gcloud {
    fn default() -> Self {
        Self::new("gcloud")
    }
}

impl Gcloud {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Run a gcloud command and return stdout
    async fn run_command(&self, args: &[&str]) -> Result<String> {
        let mut cmd = Command::new(&self.program);
        cmd.args(args);
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        tracing::debug!("Running: {} {}", self.program, args.join(" "));

        let output = cmd.output().await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => GcpError::GcloudNotFound,
            _ => GcpError::IoError(e),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GcpError::CommandFailed(stderr.trim().to_string()));
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }

    /// The project selected in the active gcloud configuration
    pub async fn project_id(&self) -> Result<Option<String>> {
        let output = self
            .run_command(&["config", "get-value", "project", "--quiet"])
            .await?;
        Ok(parse_config_value(&output))
    }

    /// A fresh access token for the active gcloud account
    pub async fn access_token(&self) -> Result<String> {
        let output = self.run_command(&["auth", "print-access-token"]).await?;
        let token = output.trim();
        if token.is_empty() {
            return Err(GcpError::CommandFailed(
                "gcloud auth print-access-token returned no token".to_string(),
            ));
        }
        Ok(token.to_string())
    }
}

/// `gcloud config get-value` prints `(unset)` or nothing for missing values
fn parse_config_value(output: &str) -> Option<String> {
    let value = output.lines().map(str::trim).find(|l| !l.is_empty())?;
    if value == "(unset)" {
        return None;
    }
    Some(value.to_string())
}
