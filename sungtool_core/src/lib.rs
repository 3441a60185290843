// sungtool - C/C++ enum header generation and native library bundling

pub mod bundle;
pub mod config;
pub mod enumgen;
pub mod error;
pub mod tooling;

// Re-export commonly used items for convenience
pub use bundle::{BundleConfig, BundleReport, Bundler, ReleaseLayout};
pub use config::SungtoolConfig;
pub use enumgen::{Catalog, CatalogSource, EnumGroup};
pub use error::{Result, SungtoolError};
