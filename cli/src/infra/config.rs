//! Infrastructure implementation of the `ConfigStore` port.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::application::ports::ConfigStore;
use crate::domain::WrapperConfig;

/// Environment variable pointing at an alternative config file.
pub const CONFIG_ENV: &str = "PODWRAP_CONFIG";

/// Environment variable overriding `podman_path` after the file is loaded.
pub const PODMAN_PATH_ENV: &str = "PODWRAP_PODMAN_PATH";

/// Production implementation of `ConfigStore` that reads a YAML file on disk.
#[derive(Debug, Default)]
pub struct YamlConfigStore {
    explicit: Option<PathBuf>,
}

impl YamlConfigStore {
    /// Store reading `path` instead of the environment or default location.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            explicit: Some(path.into()),
        }
    }
}

impl ConfigStore for YamlConfigStore {
    fn load(&self) -> Result<WrapperConfig> {
        let path = self.path()?;
        let mut config: WrapperConfig = if path.exists() {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("cannot read {}", path.display()))?;
            serde_yaml::from_str(&content)
                .with_context(|| format!("cannot parse {}", path.display()))?
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            WrapperConfig::default()
        };

        if let Ok(podman_path) = std::env::var(PODMAN_PATH_ENV) {
            config.podman_path = podman_path;
        }
        config
            .validate()
            .with_context(|| format!("invalid configuration in {}", path.display()))?;
        Ok(config)
    }

    fn path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.explicit {
            return Ok(path.clone());
        }
        if let Ok(val) = std::env::var(CONFIG_ENV) {
            return Ok(PathBuf::from(val));
        }
        let base = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("cannot determine config directory"))?;
        Ok(base.join("podwrap").join("config.yaml"))
    }
}
