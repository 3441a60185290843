//! Validate command - checks the configuration and the enum catalog.

use crate::cli::{Cli, ValidateArgs};
use crate::commands::catalog_path;
use sungtool_core::enumgen::catalog_source;
use sungtool_core::{BundleConfig, SungtoolConfig, SungtoolError, error::Result};
use tracing::{error, info, warn};

/// Runs the validate command. Fails with the first error found.
pub fn run(cli: &Cli, args: &ValidateArgs) -> Result<()> {
    info!("Validating sungtool configuration and enum catalog");

    let mut first_error: Option<SungtoolError> = None;

    info!("Checking configuration...");
    let config = match SungtoolConfig::load(cli.config.as_deref()) {
        Ok(config) => {
            info!("  Configuration: OK");
            match &config.source_file {
                Some(path) => info!("    File: {:?}", path),
                None => info!("    File: none (defaults)"),
            }
            config
        }
        Err(e) => {
            error!("  Configuration: FAILED");
            error!("    Error: {}", e);
            first_error.get_or_insert(e);
            SungtoolConfig::default()
        }
    };

    info!("Checking catalog...");
    let source = catalog_source(catalog_path(&config, args.catalog.as_ref()).as_deref());
    match source.load() {
        Ok(catalog) => {
            info!("  Catalog ({}): OK", source.describe());
            info!("    Namespace: {}", catalog.namespace());
            info!("    Groups: {}", catalog.len());
            for group in &catalog {
                info!("      {} ({} members)", group.name(), group.len());
            }
        }
        Err(e) => {
            error!("  Catalog ({}): FAILED", source.describe());
            error!("    Error: {}", e);
            first_error.get_or_insert(e);
        }
    }

    // Bundle inputs may legitimately be absent until a build has run
    check_bundle_inputs(&config.bundle_config());

    match first_error {
        Some(e) => {
            error!("Validation failed with errors");
            Err(e)
        }
        None => {
            info!("Validation passed");
            Ok(())
        }
    }
}

fn check_bundle_inputs(bundle: &BundleConfig) {
    info!("Checking bundle inputs...");
    let mut inputs = vec![bundle.source_path(), bundle.build_path()];
    inputs.extend(bundle.extra_include_paths());

    for path in inputs {
        if path.is_dir() {
            info!("  {:?}: OK", path);
        } else {
            warn!("  {:?}: missing, `sungtool bundle` will fail", path);
        }
    }
}
