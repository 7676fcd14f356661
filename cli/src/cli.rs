//! CLI argument parsing with clap derive

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::application::ports::ConfigStore;
use crate::commands;
use crate::infra::{PodmanCli, YamlConfigStore};

/// Drive a podman-compatible CLI: inspect, pull and run images
#[derive(Parser)]
#[command(
    name = "podwrap",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Read configuration from this file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Inspect or pull local images
    #[command(subcommand)]
    Image(commands::image::ImageCommand),

    /// Run an image with stdio attached
    Run(commands::run::RunArgs),
}

impl Cli {
    /// Execute the CLI command and return the process exit code.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or the command fails.
    pub async fn run(self) -> Result<i32> {
        let Cli { config, command } = self;
        let store = config.map_or_else(YamlConfigStore::default, YamlConfigStore::at);
        let mut wrapper_config = store.load()?;

        match command {
            Command::Image(cmd) => {
                let podman = PodmanCli::new(wrapper_config);
                commands::image::run(&podman, &cmd).await?;
                Ok(0)
            }
            Command::Run(args) => {
                if let Some(ms) = args.settle_ms {
                    wrapper_config.settle_delay_ms = ms;
                }
                let podman = PodmanCli::new(wrapper_config);
                commands::run::run(&podman, &args).await
            }
        }
    }
}
