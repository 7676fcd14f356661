//! Port trait definitions.
//!
//! Ports are the seams infrastructure must fill. This file imports only from
//! `crate::domain`, never from `crate::infra` or `crate::commands`.

use std::path::PathBuf;
use std::process::Output;

use anyhow::Result;

use crate::domain::{PodmanError, WrapperConfig};

/// Runs an external command to completion and captures its output.
///
/// The production implementation uses tokio; test doubles return canned
/// [`Output`] values without spawning anything.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run `program` with `args`, stdin closed, stdout and stderr captured.
    ///
    /// Blocks the calling task until the child exits. No timeout is applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or waited on. A
    /// non-zero exit is *not* an error at this level.
    async fn run(&self, program: &str, args: &[String]) -> Result<Output>;
}

/// Loads adapter configuration.
pub trait ConfigStore {
    /// Load the configuration, falling back to defaults when none exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    fn load(&self) -> Result<WrapperConfig>;

    /// Location the configuration is read from.
    ///
    /// # Errors
    ///
    /// Returns an error if no location can be determined.
    fn path(&self) -> Result<PathBuf>;
}

/// The container CLI operations: image lookup, pull, and deploy with a
/// shared stdout buffer.
///
/// Every failure is a typed [`PodmanError`]; nothing is retried.
#[allow(async_fn_in_trait)]
pub trait ContainerCli {
    /// Handles to a launched subprocess.
    type Deployment;

    /// Whether `image` (normalized) is among the locally stored images.
    ///
    /// # Errors
    ///
    /// Returns [`PodmanError::ListFailed`] if the list command cannot run or
    /// exits non-zero.
    async fn image_exists(&self, image: &str) -> Result<bool, PodmanError>;

    /// Pull `image` (normalized), optionally for a specific `platform`.
    ///
    /// Blocks the calling task until the pull exits.
    ///
    /// # Errors
    ///
    /// Returns [`PodmanError::PullFailed`] with the captured stderr on a
    /// non-zero exit, or with the launch error text if the pull cannot start.
    async fn pull_image(&self, image: &str, platform: Option<&str>) -> Result<(), PodmanError>;

    /// Launch `args` followed by the normalized `image` with all three
    /// standard streams piped, and start draining stdout.
    ///
    /// `container_name` is used for logging only; put any `--name` flag in
    /// `args`. Returns after the configured settling delay.
    ///
    /// # Errors
    ///
    /// Returns [`PodmanError::Launch`] if the executable cannot be started and
    /// [`PodmanError::PipeSetup`] if a stream handle is missing afterwards.
    async fn deploy(
        &self,
        image: &str,
        container_name: &str,
        args: Vec<String>,
    ) -> Result<Self::Deployment, PodmanError>;

    /// Snapshot of everything drained from deployed stdout since the last clear.
    fn stdout_data(&self) -> Vec<u8>;

    fn clear_buffer(&self);
}
