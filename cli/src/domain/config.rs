//! Domain types and validators for adapter configuration.
//!
//! Pure functions only, no filesystem access.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

// ── Defaults ─────────────────────────────────────────────────────────────────

pub const DEFAULT_PODMAN_PATH: &str = "podman";
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 5000;
pub const DEFAULT_READ_CHUNK_SIZE: usize = 1024;

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.config/podwrap/config.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WrapperConfig {
    /// Executable invoked for every operation. Not checked for existence.
    pub podman_path: String,
    /// Pause after a successful deploy launch before returning, in milliseconds.
    pub settle_delay_ms: u64,
    /// Bytes requested per read by the stdout drain task.
    pub read_chunk_size: usize,
}

impl Default for WrapperConfig {
    fn default() -> Self {
        Self {
            podman_path: DEFAULT_PODMAN_PATH.to_string(),
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            read_chunk_size: DEFAULT_READ_CHUNK_SIZE,
        }
    }
}

impl WrapperConfig {
    /// Config for `podman_path` with every other field at its default.
    #[must_use]
    pub fn with_path(podman_path: impl Into<String>) -> Self {
        Self {
            podman_path: podman_path.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    /// Rejects values the launcher cannot work with.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty executable path or a zero chunk size.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.podman_path.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "podman_path",
                value: String::new(),
                expected: "a non-empty executable path",
            });
        }
        if self.read_chunk_size == 0 {
            return Err(ConfigError::InvalidValue {
                key: "read_chunk_size",
                value: "0".to_string(),
                expected: "a positive number of bytes",
            });
        }
        Ok(())
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
