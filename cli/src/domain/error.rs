//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`, or
//! `crate::application`. Errors convert to `anyhow::Error` via `?` at the
//! binary boundary.

use thiserror::Error;

// ── Invocation errors ─────────────────────────────────────────────────────────

/// Failures surfaced by the container CLI adapter.
///
/// Every variant is fatal to the single invocation that produced it; nothing
/// is retried.
#[derive(Debug, Error)]
pub enum PodmanError {
    /// A standard stream of the child was not available after spawning.
    #[error("failed to set up {stream} pipe for {program}")]
    PipeSetup {
        program: String,
        stream: &'static str,
    },

    /// The executable could not be started.
    #[error("failed to launch {program}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// `pull` could not run or exited non-zero. Carries its stderr verbatim.
    #[error("image pull failed: {0}")]
    PullFailed(String),

    /// `image ls` could not run or exited non-zero.
    #[error("image list failed: {0}")]
    ListFailed(String),
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to configuration value validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}\n\nExpected: {expected}")]
    InvalidValue {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}
