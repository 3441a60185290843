//! Bundle command - assembles headers and libraries into one directory.

use crate::cli::{BundleArgs, Cli};
use crate::commands::load_config;
use sungtool_core::{Bundler, error::Result};
use tracing::{debug, error, info};

/// Runs the bundle command.
pub fn run(cli: &Cli, args: &BundleArgs) -> Result<()> {
    let config = load_config(cli)?;
    let mut bundle = config.bundle_config();

    if let Some(root) = &args.root {
        bundle.root = root.clone();
    }
    if let Some(output) = &args.output {
        bundle.output = Some(output.clone());
    }
    if let Some(layout) = args.release_layout {
        bundle.release_layout = layout.into();
    }
    if let Some(extension) = &args.lib_ext {
        bundle.library_extension = extension.clone();
    }
    debug!("Bundle settings: {:?}", bundle);

    match Bundler::new(bundle).run() {
        Ok(report) => {
            for path in &report.overwritten {
                debug!("Overwritten: {:?}", path);
            }
            info!(
                "Bundle written to {:?}: {} headers, {} libraries, {} overwritten",
                report.bundle_path,
                report.headers_copied,
                report.libraries.len(),
                report.overwritten.len()
            );
            println!("{}", report.bundle_path.display());
            Ok(())
        }
        Err(e) => {
            error!("Bundling failed: {}", e);
            Err(e)
        }
    }
}
