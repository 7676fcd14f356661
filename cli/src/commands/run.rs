//! `podwrap run`: deploy an image and relay its standard streams.

use anyhow::{Context, Result};
use clap::Args;
use tokio::io::AsyncWriteExt;

use crate::application::ports::ContainerCli;
use crate::domain::DeploymentRequest;
use crate::infra::output::{self, DrainState};
use crate::infra::Deployment;

/// Arguments for `podwrap run`.
#[derive(Args)]
pub struct RunArgs {
    /// Image reference; `:latest` is assumed when no tag is given
    pub image: String,

    /// Container name
    #[arg(long, default_value = "")]
    pub name: String,

    /// Environment assignment `KEY=VALUE` (repeatable)
    #[arg(short = 'e', long = "env", value_name = "KEY=VALUE")]
    pub env: Vec<String>,

    /// Volume bind `HOST:CONTAINER` (repeatable)
    #[arg(short = 'v', long = "volume", value_name = "HOST:CONTAINER")]
    pub volumes: Vec<String>,

    /// Cgroup namespace mode
    #[arg(long, default_value = "")]
    pub cgroupns: String,

    /// Target platform, e.g. `linux/arm64`
    #[arg(long)]
    pub platform: Option<String>,

    /// Override the configured settling delay after launch, in milliseconds
    #[arg(long, value_name = "MS")]
    pub settle_ms: Option<u64>,
}

impl RunArgs {
    #[must_use]
    pub fn to_request(&self) -> DeploymentRequest {
        DeploymentRequest {
            env: self.env.clone(),
            volumes: self.volumes.clone(),
            cgroupns: self.cgroupns.clone(),
            name: self.name.clone(),
            platform: self.platform.clone(),
        }
    }
}

/// Deploy the image, forward stdin, copy stderr through, and print the
/// drained stdout once the process exits. Returns the child's exit code.
///
/// # Errors
///
/// Returns an error if the launch fails or the child cannot be waited on.
pub async fn run<C>(podman: &C, args: &RunArgs) -> Result<i32>
where
    C: ContainerCli<Deployment = Deployment>,
{
    let request = args.to_request();
    let Deployment {
        mut stdin,
        mut stderr,
        mut child,
        mut drain,
    } = podman
        .deploy(&args.image, &args.name, request.run_args())
        .await?;

    let stdin_task = tokio::spawn(async move {
        let mut input = tokio::io::stdin();
        let _ = tokio::io::copy(&mut input, &mut stdin).await;
    });
    let stderr_task = tokio::spawn(async move {
        let mut out = tokio::io::stderr();
        let _ = tokio::io::copy(&mut stderr, &mut out).await;
    });

    let status = child
        .wait()
        .await
        .context("waiting for container process")?;
    stdin_task.abort();
    let _ = stderr_task.await;

    if let DrainState::Failed(reason) = output::wait_drained(&mut drain).await {
        tracing::warn!(%reason, "container stdout may be incomplete");
    }

    let mut out = tokio::io::stdout();
    out.write_all(&podman.stdout_data())
        .await
        .context("writing container output")?;
    out.flush().await.context("writing container output")?;
    podman.clear_buffer();

    Ok(status.code().unwrap_or(1))
}
