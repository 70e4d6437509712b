// ABOUTME: Stack entity describing one deployed version of an application.
// ABOUTME: Fields are private so the deployer can only ever read them.

use serde::{Deserialize, Serialize};

use crate::types::{Percentage, StackId, StackName, StackVersion};

/// A named, versioned deployment unit with its desired traffic share.
///
/// Several stacks may share a `stack_name`; the `stack_version` tells them
/// apart. The identifier is assigned by whoever created the stack and is
/// treated as opaque.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stack {
    stack_id: StackId,
    stack_name: StackName,
    stack_version: StackVersion,
    traffic: Percentage,
}

impl Stack {
    pub fn new(
        stack_id: StackId,
        stack_name: StackName,
        stack_version: StackVersion,
        traffic: Percentage,
    ) -> Self {
        Self {
            stack_id,
            stack_name,
            stack_version,
            traffic,
        }
    }

    /// Build a stack whose identifier follows the provisioner's
    /// `<name>-<version>` naming.
    pub fn from_name_version(
        stack_name: StackName,
        stack_version: StackVersion,
        traffic: Percentage,
    ) -> Self {
        let stack_id = StackId::new(format!("{stack_name}-{stack_version}"));
        Self::new(stack_id, stack_name, stack_version, traffic)
    }

    pub fn stack_id(&self) -> &StackId {
        &self.stack_id
    }

    pub fn stack_name(&self) -> &StackName {
        &self.stack_name
    }

    pub fn stack_version(&self) -> &StackVersion {
        &self.stack_version
    }

    pub fn traffic(&self) -> Percentage {
        self.traffic
    }
}
