use crate::error::ConfigError;
use crate::models::config::instance::RawInstance;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_LIGHTHOUSE_PATH: &str = "/usr/local/bin/lighthouse";
pub const LIGHTHOUSE_PATH_ENV: &str = "LIGHTHOUSE_PATH";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct InitConfig {
    #[serde(default)]
    pub lighthouse_path: Option<PathBuf>,
}

// conf.yaml layout: `init_config:` followed by a list of `instances:`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CheckConfig {
    #[serde(default)]
    pub init_config: Option<InitConfig>,
    #[serde(default)]
    pub instances: Vec<RawInstance>,
}

impl CheckConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// `init_config.lighthouse_path`, then `$LIGHTHOUSE_PATH`, then the default install path.
    pub fn lighthouse_path(&self) -> PathBuf {
        let configured = self
            .init_config
            .as_ref()
            .and_then(|init| init.lighthouse_path.clone());
        resolve_lighthouse_path(configured, std::env::var(LIGHTHOUSE_PATH_ENV).ok())
    }
}

pub fn resolve_lighthouse_path(configured: Option<PathBuf>, env: Option<String>) -> PathBuf {
    configured
        .filter(|p| !p.as_os_str().is_empty())
        .or_else(|| env.filter(|e| !e.is_empty()).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LIGHTHOUSE_PATH))
}
