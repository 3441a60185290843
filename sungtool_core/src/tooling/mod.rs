//! Build-time entry points for header generation.
//!
//! ## Quick Start (in build.rs)
//!
//! ```rust,ignore
//! fn main() {
//!     sungtool_core::tooling::generate().expect("Enum header generation failed");
//!     println!("cargo:rerun-if-changed=enums.toml");
//!     println!("cargo:rerun-if-changed=sungtool.toml");
//! }
//! ```

mod generator;

pub use generator::*;

use crate::config::SungtoolConfig;
use crate::error::SungtoolError;

/// Generates the enum header using the nearest `sungtool.toml`.
///
/// # Errors
///
/// Returns `SungtoolError` if:
/// - Configuration or catalog cannot be read or parsed
/// - The catalog fails validation
/// - The header cannot be written
pub fn generate() -> Result<GenerationReport, SungtoolError> {
    let config = SungtoolConfig::load(None)?;
    HeaderGenerator::new(config.enums_config()).generate()
}

/// Generates the enum header with explicit settings.
pub fn generate_with_config(config: EnumsConfig) -> Result<GenerationReport, SungtoolError> {
    HeaderGenerator::new(config).generate()
}
