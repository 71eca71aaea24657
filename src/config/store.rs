//! Loaded configuration together with the file it came from.

use std::path::{Path, PathBuf};

use crate::config::loader::ConfigError;
use crate::config::types::Config;

#[derive(Debug, Clone)]
pub struct ConfigStore {
    config: Config,
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(config: Config, path: PathBuf) -> Self {
        Self { config, path }
    }

    /// Load from `path`, or from the default location when `None`.
    pub fn open(path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.unwrap_or_else(Config::config_path);
        let config = Config::load_from(&path)?;
        Ok(Self { config, path })
    }

    pub fn get(&self) -> &Config {
        &self.config
    }

    /// Mutable access for command-line overrides. Re-validate afterwards.
    pub fn get_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
