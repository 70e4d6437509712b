// ABOUTME: Deployment error types with SNAFU pattern.
// ABOUTME: Translates provisioner execution failures into caller-facing image update errors.

use snafu::Snafu;
use std::fmt;

use crate::provisioner::ExecutionError;

/// Which provisioner command of an image update failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageUpdateStep {
    /// Changing the compute group's image. Nothing was respawned.
    Patch,
    /// Replacing instances after the image was already patched.
    Respawn,
}

impl fmt::Display for ImageUpdateStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageUpdateStep::Patch => write!(f, "patch"),
            ImageUpdateStep::Respawn => write!(f, "respawn-instances"),
        }
    }
}

/// Errors surfaced to callers of deployment operations.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum DeployError {
    /// The image update was rejected. The stack may already carry the new
    /// image if only the respawn step failed.
    #[snafu(display("image not updated: {message}"))]
    ImageNotUpdated {
        message: String,
        step: ImageUpdateStep,
        source: ExecutionError,
    },
}

impl DeployError {
    /// The provisioner's diagnostic message, unchanged.
    pub fn message(&self) -> &str {
        match self {
            DeployError::ImageNotUpdated { message, .. } => message,
        }
    }

    /// The step that failed.
    pub fn step(&self) -> ImageUpdateStep {
        match self {
            DeployError::ImageNotUpdated { step, .. } => *step,
        }
    }
}
