//! Bundle layout configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where the libraries of the `Release` configuration land.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseLayout {
    /// `<bundle>/lib`, next to the release folder instead of inside it.
    #[default]
    Sibling,
    /// `<bundle>/release/lib`, same shape as every other configuration.
    Nested,
}

impl ReleaseLayout {
    /// Library directory for a build configuration inside `bundle`.
    ///
    /// Configuration folders are lower-cased in the bundle.
    pub fn library_dir(&self, bundle: &Path, configuration: &str) -> PathBuf {
        let folder = configuration.to_lowercase();
        match self {
            ReleaseLayout::Sibling if folder == "release" => bundle.join("lib"),
            _ => bundle.join(folder).join("lib"),
        }
    }
}

/// Inputs and layout policy of one bundling run.
#[derive(Debug, Clone)]
pub struct BundleConfig {
    /// Project root every other relative path is resolved against.
    pub root: PathBuf,

    /// Bundle directory; `<root>/bundle_<timestamp>` when unset.
    pub output: Option<PathBuf>,

    /// Directory whose subdirectories each carry an `include` tree.
    pub source_dir: PathBuf,

    /// Directory whose subdirectories each carry per-configuration outputs.
    pub build_dir: PathBuf,

    /// Configuration folder names to collect libraries from (exact match).
    pub configurations: Vec<String>,

    /// Extension of the library files to collect, without the dot.
    pub library_extension: String,

    /// Third-party include trees merged after the module headers.
    pub extra_include_dirs: Vec<PathBuf>,

    pub release_layout: ReleaseLayout,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output: None,
            source_dir: PathBuf::from("source"),
            build_dir: PathBuf::from("build/source"),
            configurations: vec!["Debug".to_string(), "Release".to_string()],
            library_extension: "lib".to_string(),
            extra_include_dirs: vec![
                PathBuf::from("extern/expected/include"),
                PathBuf::from("extern/optional/include"),
            ],
            release_layout: ReleaseLayout::default(),
        }
    }
}

impl BundleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> BundleConfigBuilder {
        BundleConfigBuilder::new()
    }

    pub fn source_path(&self) -> PathBuf {
        self.root.join(&self.source_dir)
    }

    pub fn build_path(&self) -> PathBuf {
        self.root.join(&self.build_dir)
    }

    pub fn extra_include_paths(&self) -> Vec<PathBuf> {
        self.extra_include_dirs
            .iter()
            .map(|dir| self.root.join(dir))
            .collect()
    }

    /// True when `name` is one of the configured configuration folders.
    pub fn is_configuration(&self, name: &str) -> bool {
        self.configurations.iter().any(|c| c == name)
    }

    /// True when `path` has the configured library extension.
    pub fn is_library(&self, path: &Path) -> bool {
        let wanted = self.library_extension.trim_start_matches('.');
        path.extension().is_some_and(|ext| ext == wanted)
    }
}

/// Builder for creating BundleConfig programmatically.
#[derive(Debug, Clone, Default)]
pub struct BundleConfigBuilder {
    config: BundleConfig,
}

impl BundleConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: BundleConfig::default(),
        }
    }

    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.root = path.into();
        self
    }

    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output = Some(path.into());
        self
    }

    pub fn source_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.source_dir = path.into();
        self
    }

    pub fn build_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.build_dir = path.into();
        self
    }

    pub fn configurations(mut self, names: Vec<String>) -> Self {
        self.config.configurations = names;
        self
    }

    pub fn library_extension(mut self, extension: impl Into<String>) -> Self {
        self.config.library_extension = extension.into();
        self
    }

    pub fn extra_include_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.extra_include_dirs.push(path.into());
        self
    }

    pub fn extra_include_dirs(mut self, paths: Vec<PathBuf>) -> Self {
        self.config.extra_include_dirs = paths;
        self
    }

    pub fn release_layout(mut self, layout: ReleaseLayout) -> Self {
        self.config.release_layout = layout;
        self
    }

    pub fn build(self) -> BundleConfig {
        self.config
    }
}
