// ABOUTME: Update-image command implementation.
// ABOUTME: Patches the stack's machine image and respawns its instances.

use stackshift::config::Config;
use stackshift::deploy::Deployer;
use stackshift::error::Result;
use stackshift::output::Output;
use stackshift::stack::Stack;
use stackshift::types::ImageSpec;

/// Update the image of one stack. Any provisioner failure aborts the command.
pub fn update_image(
    config: &Config,
    stack: Stack,
    image: &ImageSpec,
    output: &Output,
) -> Result<()> {
    let provisioner = config.provisioner()?;

    output.progress(&format!(
        "Updating image of {} {} to {} in {}",
        stack.stack_name(),
        stack.stack_version(),
        image,
        provisioner.region()
    ));

    let deployer = Deployer::new(stack, provisioner);
    deployer.update_image(image)?;

    output.success(&format!(
        "Image of {} {} set to {}, instances are being respawned",
        deployer.stack().stack_name(),
        deployer.stack().stack_version(),
        image
    ));

    Ok(())
}
