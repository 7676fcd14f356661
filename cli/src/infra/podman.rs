//! Adapter over a podman-compatible CLI.
//!
//! [`PodmanCli`] turns structured requests into command vectors, launches the
//! executable, and owns the stdout buffer that deployed containers drain into.

use std::process::Stdio;

use tokio::process::{Child, ChildStderr, ChildStdin};
use tokio::sync::watch;

use crate::application::ports::{CommandRunner, ContainerCli};
use crate::domain::command::{deploy_command, image_list_command, pull_command};
use crate::domain::error::PodmanError;
use crate::domain::image::{image_listed, normalize_image_reference};
use crate::domain::WrapperConfig;
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::output::{self, DrainState, OutputBuffer};

/// A running deployed subprocess.
///
/// Its stdout is owned by the drain task; read it through
/// [`ContainerCli::stdout_data`]. Dropping `child` kills the process.
#[derive(Debug)]
pub struct Deployment {
    pub stdin: ChildStdin,
    pub stderr: ChildStderr,
    pub child: Child,
    /// Final state of the stdout drain, published when it stops.
    pub drain: watch::Receiver<DrainState>,
}

impl Deployment {
    #[must_use]
    pub fn drain_state(&self) -> DrainState {
        self.drain.borrow().clone()
    }

    /// Wait for the stdout drain to finish or fail.
    pub async fn wait_drained(&mut self) -> DrainState {
        output::wait_drained(&mut self.drain).await
    }
}

/// Production implementation. Shells out to the configured executable.
pub struct PodmanCli<R = TokioCommandRunner> {
    config: WrapperConfig,
    runner: R,
    stdout: OutputBuffer,
}

impl PodmanCli<TokioCommandRunner> {
    #[must_use]
    pub fn new(config: WrapperConfig) -> Self {
        Self::with_runner(config, TokioCommandRunner)
    }
}

impl<R: CommandRunner> PodmanCli<R> {
    /// Use `runner` for the synchronous pull and list paths.
    #[must_use]
    pub fn with_runner(config: WrapperConfig, runner: R) -> Self {
        Self {
            config,
            runner,
            stdout: OutputBuffer::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &WrapperConfig {
        &self.config
    }

    fn program(&self) -> &str {
        &self.config.podman_path
    }

    /// Another handle to the shared stdout buffer.
    #[must_use]
    pub fn output_buffer(&self) -> OutputBuffer {
        self.stdout.clone()
    }
}

impl<R: CommandRunner> ContainerCli for PodmanCli<R> {
    type Deployment = Deployment;

    async fn image_exists(&self, image: &str) -> Result<bool, PodmanError> {
        let image = normalize_image_reference(image);
        let output = self
            .runner
            .run(self.program(), &image_list_command())
            .await
            .map_err(|e| PodmanError::ListFailed(format!("{e:#}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            tracing::warn!(status = %output.status, %stderr, "image list exited non-zero");
            return Err(PodmanError::ListFailed(stderr));
        }

        let listing = String::from_utf8_lossy(&output.stdout);
        let exists = image_listed(&listing, &image);
        tracing::debug!(%image, exists, "image lookup");
        Ok(exists)
    }

    async fn pull_image(
        &self,
        image: &str,
        platform: Option<&str>,
    ) -> Result<(), PodmanError> {
        let output = self
            .runner
            .run(self.program(), &pull_command(image, platform))
            .await
            .map_err(|e| PodmanError::PullFailed(format!("{e:#}")))?;

        if output.status.success() {
            return Ok(());
        }
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        tracing::warn!(image, status = %output.status, %stderr, "image pull failed");
        Err(PodmanError::PullFailed(stderr))
    }

    async fn deploy(
        &self,
        image: &str,
        container_name: &str,
        args: Vec<String>,
    ) -> Result<Self::Deployment, PodmanError> {
        let program = self.program();
        let args = deploy_command(args, image);
        tracing::debug!(program, ?args, container_name, "deploying container");

        let mut child = tokio::process::Command::new(program)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| PodmanError::Launch {
                program: program.to_string(),
                source,
            })?;

        let (stdin, stdout, stderr) =
            match (child.stdin.take(), child.stdout.take(), child.stderr.take()) {
                (Some(stdin), Some(stdout), Some(stderr)) => (stdin, stdout, stderr),
                (stdin, stdout, _) => {
                    let stream = if stdin.is_none() {
                        "stdin"
                    } else if stdout.is_none() {
                        "stdout"
                    } else {
                        "stderr"
                    };
                    tracing::warn!(program, stream, "missing pipe after spawn, killing child");
                    let _ = child.start_kill();
                    return Err(PodmanError::PipeSetup {
                        program: program.to_string(),
                        stream,
                    });
                }
            };

        let drain = output::spawn_drain(stdout, self.stdout.clone(), self.config.read_chunk_size);
        tracing::info!(program, pid = ?child.id(), container_name, "container process started");

        let delay = self.config.settle_delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        Ok(Deployment {
            stdin,
            stderr,
            child,
            drain,
        })
    }

    fn stdout_data(&self) -> Vec<u8> {
        self.stdout.snapshot()
    }

    fn clear_buffer(&self) {
        self.stdout.clear();
    }
}
