//! Command-line interface definitions for sungtool.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use sungtool_core::ReleaseLayout;

/// sungtool - C/C++ enum header generation and native library bundling
#[derive(Parser, Debug)]
#[command(name = "sungtool")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to sungtool.toml configuration file
    #[arg(short, long, global = true, env = "SUNGTOOL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output (-v, -vv, -vvv for increasing verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Log filter used when `RUST_LOG` is not set.
    pub fn default_log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the C/C++ enum header (default when no command is given)
    Enums(EnumsArgs),

    /// Assemble a distributable bundle of headers and libraries
    Bundle(BundleArgs),

    /// Validate the configuration and the enum catalog
    Validate(ValidateArgs),

    /// Display the enum groups and the names derived from them
    Info(InfoArgs),

    /// Initialize a new sungtool.toml configuration file
    Init(InitArgs),
}

// ============================================================================
// Enums Arguments
// ============================================================================

#[derive(Args, Debug, Clone, Default)]
pub struct EnumsArgs {
    /// Catalog TOML file (overrides config; builtin catalog when unset)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Header file to write (overrides config; standard output when unset)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

// ============================================================================
// Bundle Arguments
// ============================================================================

#[derive(Args, Debug, Clone)]
pub struct BundleArgs {
    /// Project root containing the source and build trees
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Bundle directory (default: <root>/bundle_<timestamp>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Where Release libraries are placed
    #[arg(long, value_enum)]
    pub release_layout: Option<LayoutArg>,

    /// Library file extension to collect (e.g. "lib", "a", "so")
    #[arg(long = "lib-ext")]
    pub lib_ext: Option<String>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LayoutArg {
    /// Release libraries go to <bundle>/lib
    Sibling,
    /// Release libraries go to <bundle>/release/lib
    Nested,
}

impl From<LayoutArg> for ReleaseLayout {
    fn from(layout: LayoutArg) -> Self {
        match layout {
            LayoutArg::Sibling => ReleaseLayout::Sibling,
            LayoutArg::Nested => ReleaseLayout::Nested,
        }
    }
}

// ============================================================================
// Validate Arguments
// ============================================================================

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Catalog TOML file to validate (overrides config)
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

// ============================================================================
// Info Arguments
// ============================================================================

#[derive(Args, Debug, Clone)]
pub struct InfoArgs {
    /// Catalog TOML file to describe (overrides config)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "pretty")]
    pub format: InfoFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum InfoFormat {
    Pretty,
    Json,
}

// ============================================================================
// Init Arguments
// ============================================================================

#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite existing files if present
    #[arg(short, long)]
    pub force: bool,

    /// Also write the builtin catalog to enums.toml for editing
    #[arg(long)]
    pub with_catalog: bool,
}
