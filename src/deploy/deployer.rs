// ABOUTME: Deployer bound to one stack and one provisioner.
// ABOUTME: Switches traffic best-effort and updates images with failures surfaced to the caller.

use snafu::ResultExt;
use std::error::Error as StdError;

use crate::provisioner::{ExecutionError, Provisioner};
use crate::stack::Stack;
use crate::types::ImageSpec;

use super::error::{DeployError, ImageNotUpdatedSnafu, ImageUpdateStep};
use super::log_context::LogContext;

/// How a traffic switch ended. None of these are errors; failures have
/// already been logged by the time the outcome is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrafficOutcome {
    /// The provisioner accepted the new traffic weight.
    Switched { domains: Vec<String> },
    /// The application has no domain, so there was nothing to switch.
    NoDomain,
    /// The domains could not be looked up; traffic was left alone.
    DomainLookupFailed,
    /// The provisioner rejected the traffic change.
    TrafficFailed,
}

impl TrafficOutcome {
    pub fn is_switched(&self) -> bool {
        matches!(self, TrafficOutcome::Switched { .. })
    }

    /// Whether a provisioner failure was absorbed.
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            TrafficOutcome::DomainLookupFailed | TrafficOutcome::TrafficFailed
        )
    }
}

/// Runs deployment actions for a single stack.
///
/// The deployer never mutates the stack and keeps no state between calls;
/// each operation is independent of any earlier one.
#[derive(Debug)]
pub struct Deployer<P> {
    stack: Stack,
    provisioner: P,
    log_context: LogContext,
}

impl<P: Provisioner> Deployer<P> {
    pub fn new(stack: Stack, provisioner: P) -> Self {
        let log_context = LogContext::for_stack(&stack);
        Self {
            stack,
            provisioner,
            log_context,
        }
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    pub fn provisioner(&self) -> &P {
        &self.provisioner
    }

    pub fn log_context(&self) -> &LogContext {
        &self.log_context
    }

    /// Route the stack's share of traffic to its version, if the application
    /// has a domain.
    ///
    /// Never fails: lookup and traffic errors are logged at error level and
    /// reported through the returned outcome.
    pub fn switch_traffic(&self) -> TrafficOutcome {
        let ctx = &self.log_context;
        let stack_name = self.stack.stack_name();

        let domains = match self.provisioner.domains(stack_name) {
            Ok(domains) => domains,
            Err(err) => {
                tracing::error!(
                    stack_id = %ctx.stack_id(),
                    stack_name = %ctx.stack_name(),
                    error = %err,
                    detail = ?err,
                    sources = %source_chain(&err),
                    "failed to get domains, traffic will not be switched"
                );
                return TrafficOutcome::DomainLookupFailed;
            }
        };

        if domains.is_empty() {
            tracing::info!(
                stack_id = %ctx.stack_id(),
                stack_name = %ctx.stack_name(),
                "app does not have a domain, traffic will not be switched"
            );
            return TrafficOutcome::NoDomain;
        }

        let stack_version = self.stack.stack_version();
        let traffic = self.stack.traffic();

        tracing::info!(
            stack_id = %ctx.stack_id(),
            stack_name = %ctx.stack_name(),
            stack_version = %stack_version,
            traffic = traffic.value(),
            "switching app traffic to stack"
        );

        match self.provisioner.traffic(stack_name, stack_version, traffic) {
            Ok(()) => TrafficOutcome::Switched { domains },
            Err(err) => {
                tracing::error!(
                    stack_id = %ctx.stack_id(),
                    stack_name = %ctx.stack_name(),
                    error = %err,
                    detail = ?err,
                    sources = %source_chain(&err),
                    "failed to switch app traffic"
                );
                TrafficOutcome::TrafficFailed
            }
        }
    }

    /// Point the stack's compute group at `image` and respawn its instances.
    ///
    /// # Errors
    ///
    /// Returns `DeployError::ImageNotUpdated` carrying the provisioner's
    /// message if either command fails. The respawn is not attempted when the
    /// patch fails. A respawn failure leaves the stack patched but running old
    /// instances.
    pub fn update_image(&self, image: &ImageSpec) -> Result<(), DeployError> {
        let stack_name = self.stack.stack_name();
        let stack_version = self.stack.stack_version();

        self.provisioner
            .patch(stack_name, stack_version, image)
            .inspect_err(|err| self.log_image_failure(err, image))
            .with_context(|err| ImageNotUpdatedSnafu {
                message: err.message().to_string(),
                step: ImageUpdateStep::Patch,
            })?;

        self.provisioner
            .respawn_instances(stack_name, stack_version)
            .inspect_err(|err| self.log_image_failure(err, image))
            .with_context(|err| ImageNotUpdatedSnafu {
                message: err.message().to_string(),
                step: ImageUpdateStep::Respawn,
            })?;

        Ok(())
    }

    fn log_image_failure(&self, err: &ExecutionError, image: &ImageSpec) {
        let ctx = &self.log_context;
        tracing::info!(
            stack_id = %ctx.stack_id(),
            stack_name = %ctx.stack_name(),
            %image,
            exit_code = ?err.exit_code,
            "{}",
            err.message()
        );
    }
}

/// Render every underlying cause of `err`, outermost first, joined by ": ".
fn source_chain(err: &dyn StdError) -> String {
    let mut causes = Vec::new();
    let mut current = err.source();
    while let Some(cause) = current {
        causes.push(cause.to_string());
        current = cause.source();
    }
    causes.join(": ")
}
