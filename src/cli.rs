// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines all subcommands and their arguments.

use clap::{Args, Parser, Subcommand};
use stackshift::stack::Stack;
use stackshift::types::{ImageSpec, Percentage, Region, StackId, StackName, StackVersion};

#[derive(Parser)]
#[command(name = "stackshift")]
#[command(about = "Switch traffic and update machine images of Senza stacks")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print the final result
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print results as JSON lines
    #[arg(long, global = true)]
    pub json: bool,

    /// Region to run senza against (overrides STACKSHIFT_REGION and the config file)
    #[arg(long, global = true)]
    pub region: Option<Region>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a stackshift.yml configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// Route a share of the application's traffic to a stack version
    Traffic {
        #[command(flatten)]
        stack: StackArgs,

        /// Percentage of traffic (0-100) to send to this version
        percentage: Percentage,
    },

    /// Change the machine image of a stack and respawn its instances
    UpdateImage {
        #[command(flatten)]
        stack: StackArgs,

        /// Machine image ID, or "latest"
        image: ImageSpec,
    },
}

#[derive(Args)]
pub struct StackArgs {
    /// Stack name
    #[arg(value_name = "NAME")]
    pub stack_name: StackName,

    /// Stack version
    #[arg(value_name = "VERSION")]
    pub stack_version: StackVersion,

    /// Stack identifier used to correlate log records (default: <name>-<version>)
    #[arg(long)]
    pub stack_id: Option<String>,
}

impl StackArgs {
    pub fn into_stack(self, traffic: Percentage) -> Stack {
        match self.stack_id {
            Some(id) => Stack::new(StackId::new(id), self.stack_name, self.stack_version, traffic),
            None => Stack::from_name_version(self.stack_name, self.stack_version, traffic),
        }
    }
}
