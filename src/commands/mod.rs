// ABOUTME: Command module aggregator for the stackshift CLI.
// ABOUTME: Re-exports traffic and update-image command handlers.

mod traffic;
mod update_image;

pub use traffic::switch_traffic;
pub use update_image::update_image;
