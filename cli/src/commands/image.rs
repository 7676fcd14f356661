//! `podwrap image` subcommands.

use anyhow::Result;
use clap::Subcommand;

use crate::application::ports::ContainerCli;

#[derive(Subcommand)]
pub enum ImageCommand {
    /// Print `true` if the image is stored locally, `false` otherwise
    Exists {
        /// Image reference; `:latest` is assumed when no tag is given
        image: String,
    },

    /// Pull an image
    Pull {
        /// Image reference; `:latest` is assumed when no tag is given
        image: String,

        /// Target platform, e.g. `linux/arm64`
        #[arg(long)]
        platform: Option<String>,
    },
}

/// Run an image subcommand.
///
/// # Errors
///
/// Returns an error if the list or pull invocation fails.
pub async fn run<C: ContainerCli>(podman: &C, cmd: &ImageCommand) -> Result<()> {
    match cmd {
        ImageCommand::Exists { image } => {
            let exists = podman.image_exists(image).await?;
            println!("{exists}");
        }
        ImageCommand::Pull { image, platform } => {
            podman.pull_image(image, platform.as_deref()).await?;
        }
    }
    Ok(())
}
