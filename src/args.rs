//! Command-line arguments.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, ConfigError};

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "cardlister", version, about = "Browse trading cards from the terminal")]
pub struct Args {
    /// Path to the config file (default: <config dir>/cardlister/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the card API base URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Override the number of cards requested per page
    #[arg(long, value_name = "N")]
    pub page_size: Option<u32>,

    /// Override the search debounce delay in milliseconds
    #[arg(long, value_name = "MS")]
    pub debounce_ms: Option<u64>,
}

impl Args {
    /// Apply command-line overrides on top of the file config and
    /// re-validate the result.
    pub fn apply(&self, config: &mut Config) -> Result<(), ConfigError> {
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
        if let Some(page_size) = self.page_size {
            config.search.page_size = page_size;
        }
        if let Some(debounce_ms) = self.debounce_ms {
            config.search.debounce_ms = debounce_ms;
        }
        config.validate()
    }
}
