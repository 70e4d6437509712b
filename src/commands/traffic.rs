// ABOUTME: Traffic command implementation.
// ABOUTME: Runs a best-effort traffic switch and reports how it ended.

use stackshift::config::Config;
use stackshift::deploy::{Deployer, TrafficOutcome};
use stackshift::error::Result;
use stackshift::output::Output;
use stackshift::stack::Stack;

/// Switch traffic for one stack.
///
/// Provisioner failures are reported as warnings, not errors: the command
/// only fails when the stack or config is unusable.
pub fn switch_traffic(config: &Config, stack: Stack, output: &Output) -> Result<()> {
    let provisioner = config.provisioner()?;

    output.progress(&format!(
        "Switching {}% of {} traffic to version {} in {}",
        stack.traffic(),
        stack.stack_name(),
        stack.stack_version(),
        provisioner.region()
    ));

    let deployer = Deployer::new(stack, provisioner);
    let stack = deployer.stack();

    match deployer.switch_traffic() {
        TrafficOutcome::Switched { domains } => output.success(&format!(
            "Traffic switched: {} {} now receives {}% via {}",
            stack.stack_name(),
            stack.stack_version(),
            stack.traffic(),
            domains.join(", ")
        )),
        TrafficOutcome::NoDomain => output.success(&format!(
            "{} has no domain, traffic not switched",
            stack.stack_name()
        )),
        TrafficOutcome::DomainLookupFailed => output.warning(&format!(
            "could not look up domains of {}, traffic not switched",
            stack.stack_name()
        )),
        TrafficOutcome::TrafficFailed => output.warning(&format!(
            "failed to switch traffic to {} {}",
            stack.stack_name(),
            stack.stack_version()
        )),
    }

    Ok(())
}
