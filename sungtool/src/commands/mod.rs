//! Command handlers for the sungtool CLI.

pub mod bundle;
pub mod enums;
pub mod info;
pub mod init;
pub mod validate;

use crate::cli::Cli;
use std::path::PathBuf;
use sungtool_core::{config::SungtoolConfig, error::Result};
use tracing::{error, info};

/// Loads the configuration named by `--config`, or the nearest one.
pub fn load_config(cli: &Cli) -> Result<SungtoolConfig> {
    match SungtoolConfig::load(cli.config.as_deref()) {
        Ok(config) => {
            match &config.source_file {
                Some(path) => info!("Configuration loaded from {:?}", path),
                None => info!("No configuration file, using defaults"),
            }
            Ok(config)
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            Err(e)
        }
    }
}

/// Catalog path from the command line, falling back to the configuration.
pub fn catalog_path(config: &SungtoolConfig, override_path: Option<&PathBuf>) -> Option<PathBuf> {
    override_path
        .cloned()
        .or_else(|| config.enums_config().catalog)
}
