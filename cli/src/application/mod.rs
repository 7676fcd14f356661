//! Application layer: the ports infrastructure plugs into.

pub mod ports;

pub use ports::{CommandRunner, ConfigStore, ContainerCli};
