// ABOUTME: Correlation fields attached to every log record a deployer emits.
// ABOUTME: Computed once from the stack when the deployer is built.

use std::collections::BTreeMap;

use crate::stack::Stack;
use crate::types::{StackId, StackName};

/// Identifies which stack a log record belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogContext {
    stack_id: StackId,
    stack_name: StackName,
}

impl LogContext {
    /// Field name carrying the stack identifier.
    pub const STACK_ID: &'static str = "stack_id";
    /// Field name carrying the stack name.
    pub const STACK_NAME: &'static str = "stack_name";

    pub fn for_stack(stack: &Stack) -> Self {
        Self {
            stack_id: stack.stack_id().clone(),
            stack_name: stack.stack_name().clone(),
        }
    }

    pub fn stack_id(&self) -> &StackId {
        &self.stack_id
    }

    pub fn stack_name(&self) -> &StackName {
        &self.stack_name
    }

    /// The context as field name / value pairs.
    pub fn to_map(&self) -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            (Self::STACK_ID, self.stack_id.to_string()),
            (Self::STACK_NAME, self.stack_name.to_string()),
        ])
    }
}
