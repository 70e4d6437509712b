// ABOUTME: Library root for stackshift - traffic switching and image updates for stacks.
// ABOUTME: The main binary is in main.rs.

pub mod config;
pub mod deploy;
pub mod error;
pub mod output;
pub mod provisioner;
pub mod stack;
pub mod types;
