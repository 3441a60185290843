//! Info command - displays the enum groups and their derived names.

use crate::cli::{Cli, InfoArgs, InfoFormat};
use crate::commands::{catalog_path, load_config};
use serde_json::json;
use sungtool_core::enumgen::conversion::ConversionTable;
use sungtool_core::enumgen::{Catalog, catalog_source};
use sungtool_core::SungtoolError;
use sungtool_core::error::Result;
use tracing::{debug, error, info};

/// Runs the info command.
pub fn run(cli: &Cli, args: &InfoArgs) -> Result<()> {
    let config = load_config(cli)?;
    let source = catalog_source(catalog_path(&config, args.catalog.as_ref()).as_deref());
    debug!("Describing {}", source.describe());
    let catalog = source.load()?;

    match args.format {
        InfoFormat::Pretty => show_pretty(&catalog, &source.describe()),
        InfoFormat::Json => println!("{}", catalog_json(&catalog, &source.describe())?),
    }

    info!("Use 'sungtool enums' to generate the header");
    Ok(())
}

fn show_pretty(catalog: &Catalog, source: &str) {
    println!("\n=== Enum Catalog ===\n");
    println!("Source: {}", source);
    println!("Namespace: {}", catalog.namespace());
    println!("Groups: {}", catalog.len());

    for group in catalog {
        let table = ConversionTable::new(catalog.naming(), group);
        println!("\n{}:", group.name());
        println!("  Plain type: {}", table.plain_type());
        println!("  C++ type:   {}::{}", catalog.namespace(), table.rich_type());
        println!(
            "  Members:    {} (+ sentinel, + unknown)",
            group.real_members().len()
        );
        if let Some((first, _)) = table.cases().next() {
            println!("  First constant: {}", first);
        }
    }
}

fn catalog_json(catalog: &Catalog, source: &str) -> Result<String> {
    let groups: Vec<_> = catalog
        .iter()
        .map(|group| {
            let table = ConversionTable::new(catalog.naming(), group);
            json!({
                "name": group.name(),
                "plain_type": table.plain_type(),
                "rich_type": table.rich_type(),
                "members": group.members(),
                "sentinel_ordinal": group.sentinel_ordinal(),
            })
        })
        .collect();

    let document = json!({
        "source": source,
        "namespace": catalog.namespace(),
        "groups": groups,
    });
    serde_json::to_string_pretty(&document).map_err(|e| {
        error!("Failed to serialize catalog info: {}", e);
        SungtoolError::config(format!("cannot serialize catalog info: {e}"))
    })
}
