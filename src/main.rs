// ABOUTME: Entry point for the stackshift CLI application.
// ABOUTME: Parses arguments and dispatches to appropriate command handlers.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use stackshift::config::{self, Config};
use stackshift::error::Result;
use stackshift::output::{Output, OutputMode};
use stackshift::types::Percentage;
use std::env;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber based on verbose flag
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let mut output = Output::new(OutputMode::from_flags(cli.quiet, cli.json));

    if let Err(e) = run(cli, &mut output) {
        output.error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(cli: Cli, output: &mut Output) -> Result<()> {
    let cwd = env::current_dir()?;

    match cli.command {
        Commands::Init { force } => {
            let region = cli.region.as_ref().map(|r| r.as_str());
            let path = config::init_config(&cwd, region, force)?;
            output.success(&format!("Created {}", path.display()));
            Ok(())
        }
        Commands::Traffic { stack, percentage } => {
            let config = Config::discover_or_default(&cwd)?.with_region_override(cli.region)?;
            output.start_timer();
            commands::switch_traffic(&config, stack.into_stack(percentage), output)
        }
        Commands::UpdateImage { stack, image } => {
            let config = Config::discover_or_default(&cwd)?.with_region_override(cli.region)?;
            output.start_timer();
            // Image updates never read the traffic share.
            let stack = stack.into_stack(Percentage::ZERO);
            commands::update_image(&config, stack, &image, output)
        }
    }
}
