// ABOUTME: Error types for provisioner operations.
// ABOUTME: One type per failure signal: command execution, domain lookup, traffic switch.

use thiserror::Error;

/// A provisioner command that could not be run or exited unsuccessfully.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct ExecutionError {
    /// Exit code of the command; `None` if it never ran or was killed by a signal.
    pub exit_code: Option<i32>,
    /// Human-readable output explaining the failure.
    pub message: String,
}

impl ExecutionError {
    pub fn new(exit_code: Option<i32>, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// The provisioner could not determine the domains of a stack.
#[derive(Debug, Error)]
pub enum DomainsError {
    #[error("domain lookup failed: {0}")]
    Execution(#[from] ExecutionError),

    #[error("unexpected domain listing: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The provisioner rejected or failed a traffic change.
#[derive(Debug, Error)]
#[error("traffic switch failed: {0}")]
pub struct TrafficError(#[from] pub ExecutionError);
