//! Infrastructure layer: concrete implementations of the application ports.

pub mod command_runner;
pub mod config;
pub mod output;
pub mod podman;

pub use command_runner::TokioCommandRunner;
pub use config::YamlConfigStore;
pub use output::{DrainState, OutputBuffer};
pub use podman::{Deployment, PodmanCli};
