//! Enums command - generates the C/C++ enum header.

use crate::cli::{Cli, EnumsArgs};
use crate::commands::{catalog_path, load_config};
use sungtool_core::error::Result;
use sungtool_core::tooling::{EnumsConfig, HeaderGenerator, HeaderOutput};
use tracing::{error, info};

/// Runs header generation with the configured catalog and output.
pub fn run_default(cli: &Cli) -> Result<()> {
    run(cli, &EnumsArgs::default())
}

/// Runs the enums command.
pub fn run(cli: &Cli, args: &EnumsArgs) -> Result<()> {
    let config = load_config(cli)?;
    let enums = EnumsConfig {
        catalog: catalog_path(&config, args.catalog.as_ref()),
        output: args
            .output
            .clone()
            .or_else(|| config.enums_config().output),
    };

    info!("Generating enum header");
    match HeaderGenerator::new(enums).generate() {
        Ok(report) => {
            let target = match &report.output {
                HeaderOutput::Stdout => "stdout".to_string(),
                HeaderOutput::File(path) => path.display().to_string(),
            };
            info!(
                groups = report.groups_processed,
                constants = report.constants_emitted,
                bytes = report.bytes_written,
                unchanged = report.unchanged,
                "Enum header written to {}",
                target
            );
            Ok(())
        }
        Err(e) => {
            error!("Enum header generation failed: {}", e);
            Err(e)
        }
    }
}
