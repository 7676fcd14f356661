//! `podwrap image` dispatch over the `ContainerCli` port.

#![allow(clippy::expect_used)]

use std::sync::Mutex;

use podman_cli_wrapper::commands::image::{self, ImageCommand};
use podman_cli_wrapper::{ContainerCli, PodmanError};

/// Records every call and answers from fixed values.
#[derive(Default)]
struct RecordingCli {
    calls: Mutex<Vec<String>>,
    pull_error: Option<&'static str>,
}

impl RecordingCli {
    fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("lock").clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().expect("lock").push(call);
    }
}

impl ContainerCli for RecordingCli {
    type Deployment = ();

    async fn image_exists(&self, image: &str) -> Result<bool, PodmanError> {
        self.record(format!("exists {image}"));
        Ok(true)
    }

    async fn pull_image(&self, image: &str, platform: Option<&str>) -> Result<(), PodmanError> {
        self.record(format!("pull {image} {platform:?}"));
        match self.pull_error {
            Some(msg) => Err(PodmanError::PullFailed(msg.to_string())),
            None => Ok(()),
        }
    }

    async fn deploy(
        &self,
        image: &str,
        _container_name: &str,
        _args: Vec<String>,
    ) -> Result<(), PodmanError> {
        self.record(format!("deploy {image}"));
        Ok(())
    }

    fn stdout_data(&self) -> Vec<u8> {
        Vec::new()
    }

    fn clear_buffer(&self) {}
}

#[tokio::test]
async fn test_exists_queries_the_port() {
    let cli = RecordingCli::default();
    let cmd = ImageCommand::Exists {
        image: "nginx".to_string(),
    };
    image::run(&cli, &cmd).await.expect("exists runs");
    assert_eq!(cli.calls(), vec!["exists nginx"]);
}

#[tokio::test]
async fn test_pull_forwards_platform() {
    let cli = RecordingCli::default();
    let cmd = ImageCommand::Pull {
        image: "alpine:3".to_string(),
        platform: Some("linux/arm64".to_string()),
    };
    image::run(&cli, &cmd).await.expect("pull runs");
    assert_eq!(cli.calls(), vec![r#"pull alpine:3 Some("linux/arm64")"#]);
}

#[tokio::test]
async fn test_pull_failure_propagates() {
    let cli = RecordingCli {
        pull_error: Some("manifest unknown"),
        ..RecordingCli::default()
    };
    let cmd = ImageCommand::Pull {
        image: "nosuch".to_string(),
        platform: None,
    };
    let err = image::run(&cli, &cmd).await.expect_err("pull fails");
    assert!(err.to_string().contains("manifest unknown"), "got: {err}");
}
