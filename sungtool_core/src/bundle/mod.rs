//! Distributable bundle assembly.
//!
//! A bundle merges every module's `include` tree plus the third-party
//! include trees into one `include` directory, and collects the compiled
//! libraries of each build configuration:
//!
//! ```text
//! bundle_2024-01-12_14-30-52/
//! ├── include/
//! ├── debug/lib/*.lib
//! └── lib/*.lib          <- Release, see ReleaseLayout
//! ```
//!
//! Any failure aborts the run and leaves the partial bundle behind.

mod config;

pub use config::{BundleConfig, BundleConfigBuilder, ReleaseLayout};

use crate::error::{Result, SungtoolError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace, warn};
use walkdir::WalkDir;

/// Outcome of a bundling run.
#[derive(Debug, Clone, Default)]
pub struct BundleReport {
    /// Directory the bundle was written to.
    pub bundle_path: PathBuf,
    /// Header files copied into `include`, overwrites included.
    pub headers_copied: usize,
    /// Destination paths of the copied libraries, each listed once.
    pub libraries: Vec<PathBuf>,
    /// Destinations that already existed and were replaced.
    pub overwritten: Vec<PathBuf>,
}

pub struct Bundler {
    config: BundleConfig,
}

impl Bundler {
    pub fn new(config: BundleConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BundleConfig {
        &self.config
    }

    /// Configured output, or a timestamped directory under the root.
    pub fn bundle_path(&self) -> PathBuf {
        match &self.config.output {
            Some(output) => output.clone(),
            None => self.config.root.join(
                chrono::Local::now()
                    .format("bundle_%Y-%m-%d_%H-%M-%S")
                    .to_string(),
            ),
        }
    }

    pub fn run(&self) -> Result<BundleReport> {
        let bundle_path = self.bundle_path();
        info!("Assembling bundle at {:?}", bundle_path);
        fs::create_dir_all(&bundle_path)?;

        let mut report = BundleReport {
            bundle_path: bundle_path.clone(),
            ..BundleReport::default()
        };
        let include_out = bundle_path.join("include");

        for module in subdirectories(&self.config.source_path())? {
            debug!("Merging headers of module {:?}", module);
            merge_tree(&module.join("include"), &include_out, &mut report)?;
        }

        self.collect_libraries(&bundle_path, &mut report)?;

        for extra in self.config.extra_include_paths() {
            debug!("Merging extra include tree {:?}", extra);
            merge_tree(&extra, &include_out, &mut report)?;
        }

        info!(
            headers = report.headers_copied,
            libraries = report.libraries.len(),
            overwritten = report.overwritten.len(),
            "Bundle complete"
        );
        Ok(report)
    }

    fn collect_libraries(&self, bundle_path: &Path, report: &mut BundleReport) -> Result<()> {
        for module in subdirectories(&self.config.build_path())? {
            for configuration_dir in subdirectories(&module)? {
                let Some(configuration) = configuration_dir
                    .file_name()
                    .and_then(|name| name.to_str())
                else {
                    continue;
                };
                if !self.config.is_configuration(configuration) {
                    trace!("Skipping non-configuration folder {:?}", configuration_dir);
                    continue;
                }

                let library_dir = self
                    .config
                    .release_layout
                    .library_dir(bundle_path, configuration);

                for library in files_in(&configuration_dir)? {
                    if !self.config.is_library(&library) {
                        continue;
                    }
                    let Some(file_name) = library.file_name() else {
                        return Err(SungtoolError::InvalidPath { path: library });
                    };
                    fs::create_dir_all(&library_dir)?;
                    let target = library_dir.join(file_name);
                    if !copy_file(&library, &target, report)? {
                        report.libraries.push(target);
                    }
                }
            }
        }
        Ok(())
    }
}

/// Immediate subdirectories of `dir`, sorted by name.
fn subdirectories(dir: &Path) -> Result<Vec<PathBuf>> {
    entries(dir, |entry| entry.file_type().is_dir())
}

/// Immediate regular files of `dir`, sorted by name.
fn files_in(dir: &Path) -> Result<Vec<PathBuf>> {
    entries(dir, |entry| entry.file_type().is_file())
}

fn entries(dir: &Path, keep: impl Fn(&walkdir::DirEntry) -> bool) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(SungtoolError::missing_directory(dir));
    }
    let mut found = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry?;
        if keep(&entry) {
            found.push(entry.into_path());
        }
    }
    Ok(found)
}

/// Copies the tree under `source` into `destination`, replacing files that
/// already exist there.
fn merge_tree(source: &Path, destination: &Path, report: &mut BundleReport) -> Result<()> {
    if !source.is_dir() {
        return Err(SungtoolError::missing_directory(source));
    }

    for entry in WalkDir::new(source).follow_links(true).sort_by_file_name() {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|_| SungtoolError::InvalidPath {
                path: entry.path().to_path_buf(),
            })?;
        let target = destination.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else if entry.file_type().is_file() {
            copy_file(entry.path(), &target, report)?;
            report.headers_copied += 1;
        }
    }
    Ok(())
}

/// Returns whether an existing file at `target` was replaced.
fn copy_file(source: &Path, target: &Path, report: &mut BundleReport) -> Result<bool> {
    let replaced = target.exists();
    if replaced {
        warn!("Overwriting {:?} with {:?}", target, source);
        report.overwritten.push(target.to_path_buf());
    }
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    trace!("Copying {:?} -> {:?}", source, target);
    fs::copy(source, target)?;
    Ok(replaced)
}
