//! Init command - writes a starter sungtool.toml.

use crate::cli::{Cli, InitArgs};
use std::fs;
use std::path::Path;
use sungtool_core::config::CONFIG_FILE_NAME;
use sungtool_core::enumgen::{BuiltinCatalog, CatalogSource};
use sungtool_core::error::Result;
use tracing::{error, info};

const CATALOG_FILE_NAME: &str = "enums.toml";

/// Runs the init command in the current directory.
pub fn run(_cli: &Cli, args: &InitArgs) -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);

    if config_path.exists() && !args.force {
        error!("{} already exists. Use --force to overwrite.", CONFIG_FILE_NAME);
        return Ok(());
    }

    fs::write(config_path, generate_config(args.with_catalog))?;
    info!("Created {}", CONFIG_FILE_NAME);

    if args.with_catalog {
        let catalog_path = Path::new(CATALOG_FILE_NAME);
        if catalog_path.exists() && !args.force {
            error!("{} already exists, leaving it in place", CATALOG_FILE_NAME);
        } else {
            let catalog = BuiltinCatalog.load()?;
            fs::write(catalog_path, catalog.to_toml_string()?)?;
            info!("Created {} from the builtin catalog", CATALOG_FILE_NAME);
        }
    }

    info!("sungtool initialized successfully!");
    info!("Next steps:");
    info!("  1. Edit {} to point at your header and bundle paths", CONFIG_FILE_NAME);
    info!("  2. Run 'sungtool enums' to generate the header");
    info!("  3. Run 'sungtool bundle' after building the libraries");

    Ok(())
}

fn generate_config(with_catalog: bool) -> String {
    let catalog_line = if with_catalog {
        format!("catalog = \"{}\"", CATALOG_FILE_NAME)
    } else {
        format!("# catalog = \"{}\"", CATALOG_FILE_NAME)
    };

    format!(
        r#"# sungtool configuration
# Strings may reference environment variables as ${{VAR}} or ${{VAR:-default}}.

[enums]
# Enum catalog; the builtin catalog is used when unset
{catalog_line}
# Header file; written to standard output when unset
output = "include/sung/input_enum.h"

[bundle]
root = "."
source_dir = "source"
build_dir = "build/source"
configurations = ["Debug", "Release"]
library_extension = "lib"
extra_include_dirs = ["extern/expected/include", "extern/optional/include"]
# "sibling" puts Release libraries in <bundle>/lib, "nested" in <bundle>/release/lib
release_layout = "sibling"
"#
    )
}
