//! Header generation for build-time and CLI usage.

use crate::enumgen::{Catalog, catalog_source, generate, render, write_lines};
use crate::error::SungtoolError;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{debug, info};

/// Resolved `[enums]` settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumsConfig {
    /// Catalog document; builtin catalog when `None`.
    pub catalog: Option<PathBuf>,
    /// Header file; standard output when `None`.
    pub output: Option<PathBuf>,
}

/// Where the header went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderOutput {
    Stdout,
    File(PathBuf),
}

/// Report of one generation run.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub output: HeaderOutput,
    /// Bytes in the generated header.
    pub bytes_written: usize,
    pub groups_processed: usize,
    /// Plain-C constants emitted, sentinels included.
    pub constants_emitted: usize,
    /// The target file already held this exact header and was not rewritten.
    pub unchanged: bool,
}

/// Loads a catalog and writes its header.
pub struct HeaderGenerator {
    config: EnumsConfig,
}

impl HeaderGenerator {
    pub fn new(config: EnumsConfig) -> Self {
        Self { config }
    }

    pub fn load_catalog(&self) -> Result<Catalog, SungtoolError> {
        let source = catalog_source(self.config.catalog.as_deref());
        debug!("Using {}", source.describe());
        source.load()
    }

    /// Generates to the configured output.
    pub fn generate(&self) -> Result<GenerationReport, SungtoolError> {
        let catalog = self.load_catalog()?;
        match &self.config.output {
            Some(path) => self.generate_to_file(&catalog, path.clone()),
            None => {
                let stdout = io::stdout();
                let mut handle = stdout.lock();
                self.generate_to_writer(&catalog, &mut handle)
            }
        }
    }

    /// Streams the header into `writer`.
    pub fn generate_to_writer<W: Write + ?Sized>(
        &self,
        catalog: &Catalog,
        writer: &mut W,
    ) -> Result<GenerationReport, SungtoolError> {
        let bytes_written = write_lines(generate(catalog), writer)?;
        Ok(report(catalog, HeaderOutput::Stdout, bytes_written, false))
    }

    /// Writes the header to `path` unless it already holds identical content.
    pub fn generate_to_file(
        &self,
        catalog: &Catalog,
        path: PathBuf,
    ) -> Result<GenerationReport, SungtoolError> {
        let header = render(catalog);

        if fs::read(&path).is_ok_and(|existing| existing == header.as_bytes()) {
            info!("{:?} is up to date", path);
            return Ok(report(catalog, HeaderOutput::File(path), header.len(), true));
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, &header)?;
        info!("Enum header written to {:?}", path);

        Ok(report(catalog, HeaderOutput::File(path), header.len(), false))
    }
}

fn report(
    catalog: &Catalog,
    output: HeaderOutput,
    bytes_written: usize,
    unchanged: bool,
) -> GenerationReport {
    GenerationReport {
        output,
        bytes_written,
        groups_processed: catalog.len(),
        constants_emitted: catalog.iter().map(|group| group.len()).sum(),
        unchanged,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enumgen::{BuiltinCatalog, CatalogSource};
    use tempfile::TempDir;

    #[test]
    fn test_generate_to_file_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("include/sung/input_enum.h");
        let config = EnumsConfig {
            catalog: None,
            output: Some(path.clone()),
        };

        let report = crate::tooling::generate_with_config(config).unwrap();
        assert_eq!(report.output, HeaderOutput::File(path.clone()));
        assert_eq!(report.groups_processed, 3);
        assert_eq!(report.constants_emitted, 4 + 6 + 63);
        assert!(!report.unchanged);

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written.len(), report.bytes_written);
        assert!(written.starts_with("#pragma once\n"));
    }

    #[test]
    fn test_second_run_leaves_file_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("input_enum.h");
        let generator = HeaderGenerator::new(EnumsConfig {
            catalog: None,
            output: Some(path.clone()),
        });

        let first = generator.generate().unwrap();
        let second = generator.generate().unwrap();
        assert!(!first.unchanged);
        assert!(second.unchanged);
        assert_eq!(first.bytes_written, second.bytes_written);
    }

    #[test]
    fn test_stale_file_is_rewritten() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("input_enum.h");
        fs::write(&path, "#pragma once\n").unwrap();

        let report = HeaderGenerator::new(EnumsConfig {
            catalog: None,
            output: Some(path.clone()),
        })
        .generate()
        .unwrap();

        assert!(!report.unchanged);
        assert!(fs::read_to_string(&path).unwrap().contains("SungKeyCode"));
    }

    #[test]
    fn test_generate_to_writer_matches_render() {
        let catalog = BuiltinCatalog.load().unwrap();
        let generator = HeaderGenerator::new(EnumsConfig::default());
        let mut buffer = Vec::new();

        let report = generator.generate_to_writer(&catalog, &mut buffer).unwrap();
        assert_eq!(report.output, HeaderOutput::Stdout);
        assert_eq!(report.bytes_written, buffer.len());
        assert_eq!(String::from_utf8(buffer).unwrap(), render(&catalog));
    }

    #[test]
    fn test_catalog_file_errors_propagate() {
        let dir = TempDir::new().unwrap();
        let catalog_path = dir.path().join("enums.toml");
        fs::write(
            &catalog_path,
            "[[group]]\nname = \"mouse btn\"\nmembers = [\"left\"]\n",
        )
        .unwrap();

        let err = HeaderGenerator::new(EnumsConfig {
            catalog: Some(catalog_path),
            output: Some(dir.path().join("out.h")),
        })
        .generate()
        .unwrap_err();

        assert!(matches!(err, SungtoolError::MissingSentinel { .. }));
        assert!(!dir.path().join("out.h").exists());
    }
}
