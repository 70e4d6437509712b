// ABOUTME: Capability trait for the external stack provisioner.
// ABOUTME: Domain lookup, traffic weighting, image patching, and instance respawn.

use super::error::{DomainsError, ExecutionError, TrafficError};
use crate::types::{ImageSpec, Percentage, StackName, StackVersion};

/// Commands the deployer issues against already-created stacks.
///
/// Every method blocks until the provisioner has accepted or rejected the
/// command. Acceptance does not mean the change has finished rolling out.
pub trait Provisioner {
    /// List the domains routed to stacks named `stack_name`. An empty list
    /// means the application has no public domain.
    fn domains(&self, stack_name: &StackName) -> Result<Vec<String>, DomainsError>;

    /// Route `percentage` of the application's traffic to one version.
    fn traffic(
        &self,
        stack_name: &StackName,
        stack_version: &StackVersion,
        percentage: Percentage,
    ) -> Result<(), TrafficError>;

    /// Point the stack's compute group at a new machine image.
    fn patch(
        &self,
        stack_name: &StackName,
        stack_version: &StackVersion,
        image: &ImageSpec,
    ) -> Result<(), ExecutionError>;

    /// Replace the compute group's running instances so they boot the
    /// current image.
    fn respawn_instances(
        &self,
        stack_name: &StackName,
        stack_version: &StackVersion,
    ) -> Result<(), ExecutionError>;
}

impl<P: Provisioner + ?Sized> Provisioner for &P {
    fn domains(&self, stack_name: &StackName) -> Result<Vec<String>, DomainsError> {
        (**self).domains(stack_name)
    }

    fn traffic(
        &self,
        stack_name: &StackName,
        stack_version: &StackVersion,
        percentage: Percentage,
    ) -> Result<(), TrafficError> {
        (**self).traffic(stack_name, stack_version, percentage)
    }

    fn patch(
        &self,
        stack_name: &StackName,
        stack_version: &StackVersion,
        image: &ImageSpec,
    ) -> Result<(), ExecutionError> {
        (**self).patch(stack_name, stack_version, image)
    }

    fn respawn_instances(
        &self,
        stack_name: &StackName,
        stack_version: &StackVersion,
    ) -> Result<(), ExecutionError> {
        (**self).respawn_instances(stack_name, stack_version)
    }
}
