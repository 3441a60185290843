//! Enum table compiler.
//!
//! A [`Catalog`] of enum groups is compiled into a single C/C++ header in
//! which every group exists twice, once as a plain-C enum for the ABI layer
//! and once as a C++ `enum class`, tied together by a generated `conv_enum`.
//!
//! ```rust
//! use sungtool_core::enumgen::{BuiltinCatalog, CatalogSource, render};
//!
//! let catalog = BuiltinCatalog.load().unwrap();
//! let header = render(&catalog);
//! assert!(header.starts_with("#pragma once\n"));
//! assert!(header.contains("SUNG_MOUSE_BTN_LEFT,"));
//! ```

pub mod catalog;
pub mod conversion;
pub mod generator;
pub mod naming;
pub mod source;

pub use catalog::{Catalog, EnumGroup};
pub use conversion::{ConversionTable, RichValue};
pub use generator::{generate, render, write_lines};
pub use naming::Naming;
pub use source::{BuiltinCatalog, CatalogSource, TomlCatalogFile, catalog_source};
