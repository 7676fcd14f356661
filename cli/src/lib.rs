//! Adapter that drives a podman-compatible CLI as a subprocess.
//!
//! Builds command vectors from structured requests, launches the executable
//! with piped standard streams, drains deployed stdout into a shared buffer,
//! and answers image-presence queries from `image ls` output.

#![cfg_attr(test, allow(clippy::expect_used))]

pub mod application;
pub mod cli;
pub mod commands;
pub mod domain;
pub mod infra;

pub use application::ContainerCli;
pub use domain::{DeploymentRequest, PodmanError, WrapperConfig, normalize_image_reference};
pub use infra::{Deployment, DrainState, OutputBuffer, PodmanCli};
