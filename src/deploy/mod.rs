// ABOUTME: Deployment actions against an existing stack.
// ABOUTME: Exports the Deployer, its outcomes, the log context, and DeployError.

mod deployer;
mod error;
mod log_context;

pub use deployer::{Deployer, TrafficOutcome};
pub use error::{DeployError, ImageUpdateStep};
pub use log_context::LogContext;
