//! Domain layer: pure types and logic with no I/O.
//!
//! Nothing in here spawns processes, touches the filesystem or awaits.

pub mod command;
pub mod config;
pub mod error;
pub mod image;

pub use command::DeploymentRequest;
pub use config::WrapperConfig;
pub use error::{ConfigError, PodmanError};
pub use image::normalize_image_reference;
