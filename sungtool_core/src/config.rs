use crate::bundle::{BundleConfig, ReleaseLayout};
use crate::error::{Result, SungtoolError};
use crate::tooling::EnumsConfig;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing::{debug, error, info, trace, warn};

/// File name searched for in the current directory and its ancestors.
pub const CONFIG_FILE_NAME: &str = "sungtool.toml";

/// `[enums]` section: where the catalog comes from and where the header goes.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct EnumsSection {
    /// Catalog document; the builtin catalog is used when unset.
    #[serde(default)]
    pub catalog: Option<String>,
    /// Header path; standard output when unset.
    #[serde(default)]
    pub output: Option<String>,
}

/// `[bundle]` section, mirrored by [`BundleConfig`] once paths are resolved.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct BundleSection {
    pub root: String,
    pub output: Option<String>,
    pub source_dir: String,
    pub build_dir: String,
    pub configurations: Vec<String>,
    pub library_extension: String,
    pub extra_include_dirs: Vec<String>,
    pub release_layout: ReleaseLayout,
}

impl Default for BundleSection {
    fn default() -> Self {
        let defaults = BundleConfig::default();
        Self {
            root: ".".to_string(),
            output: None,
            source_dir: defaults.source_dir.display().to_string(),
            build_dir: defaults.build_dir.display().to_string(),
            configurations: defaults.configurations,
            library_extension: defaults.library_extension,
            extra_include_dirs: defaults
                .extra_include_dirs
                .iter()
                .map(|dir| dir.display().to_string())
                .collect(),
            release_layout: defaults.release_layout,
        }
    }
}

/// Root configuration loaded from `sungtool.toml`.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct SungtoolConfig {
    #[serde(default)]
    pub enums: EnumsSection,
    #[serde(default)]
    pub bundle: BundleSection,
    /// Directory relative paths are resolved against.
    #[serde(skip)]
    pub base_dir: PathBuf,
    /// File the configuration was read from, if any.
    #[serde(skip)]
    pub source_file: Option<PathBuf>,
}

impl SungtoolConfig {
    /// Loads the configuration from `explicit` when given, otherwise from the
    /// nearest `sungtool.toml` above the current directory. Without a file the
    /// defaults apply, rooted at the current directory.
    pub fn load(explicit: Option<&Path>) -> Result<SungtoolConfig> {
        dotenv::dotenv().ok();
        debug!("Environment variables loaded from .env if present");

        if let Some(path) = explicit {
            if !path.is_file() {
                error!("Configuration file {:?} does not exist", path);
                return Err(SungtoolError::ConfigNotFound {
                    path: path.to_path_buf(),
                });
            }
            return Self::from_path(path);
        }

        let current_dir = env::current_dir()?;
        match Self::find_config_file(&current_dir) {
            Some(path) => Self::from_path(&path),
            None => {
                debug!("No {} found, using defaults", CONFIG_FILE_NAME);
                Ok(SungtoolConfig {
                    base_dir: current_dir,
                    ..SungtoolConfig::default()
                })
            }
        }
    }

    /// Reads and parses a specific configuration file.
    pub fn from_path(path: &Path) -> Result<SungtoolConfig> {
        info!("Found configuration file at: {:?}", path);
        let contents = fs::read_to_string(path).map_err(|e| {
            error!("Failed to read configuration file: {}", e);
            SungtoolError::from(e)
        })?;
        debug!("Configuration file size: {} bytes", contents.len());

        let base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let mut config = Self::from_toml_str(&contents, base_dir)?;
        config.source_file = Some(path.to_path_buf());
        Ok(config)
    }

    /// Parses configuration text, substituting `${VAR}` references.
    pub fn from_toml_str(contents: &str, base_dir: impl Into<PathBuf>) -> Result<SungtoolConfig> {
        let mut config: SungtoolConfig = toml::from_str(contents).map_err(|e| {
            error!("Failed to parse TOML configuration: {}", e);
            SungtoolError::config(e.to_string())
        })?;
        config.base_dir = base_dir.into();

        debug!("Substituting environment variables in configuration");
        let enums = &mut config.enums;
        enums.catalog = substitute_optional(enums.catalog.take())?;
        enums.output = substitute_optional(enums.output.take())?;

        let bundle = &mut config.bundle;
        bundle.root = Self::substitute_env_vars(&bundle.root)?;
        bundle.output = substitute_optional(bundle.output.take())?;
        bundle.source_dir = Self::substitute_env_vars(&bundle.source_dir)?;
        bundle.build_dir = Self::substitute_env_vars(&bundle.build_dir)?;
        bundle.library_extension = Self::substitute_env_vars(&bundle.library_extension)?;
        for dir in &mut bundle.extra_include_dirs {
            *dir = Self::substitute_env_vars(dir)?;
        }

        Ok(config)
    }

    /// Searches for `sungtool.toml` starting from `start` and walking up to
    /// the root.
    pub fn find_config_file(start: &Path) -> Option<PathBuf> {
        debug!("Starting config file search from: {:?}", start);
        for path in start.ancestors() {
            let config_path = path.join(CONFIG_FILE_NAME);
            trace!("Checking for config at: {:?}", config_path);
            if config_path.is_file() {
                return Some(config_path);
            }
        }
        None
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.base_dir.join(path)
    }

    /// Header generation settings with paths resolved.
    pub fn enums_config(&self) -> EnumsConfig {
        EnumsConfig {
            catalog: self.enums.catalog.as_deref().map(|p| self.resolve(p)),
            output: self.enums.output.as_deref().map(|p| self.resolve(p)),
        }
    }

    /// Bundle settings with the root resolved; the other bundle paths stay
    /// relative to that root.
    pub fn bundle_config(&self) -> BundleConfig {
        let section = &self.bundle;
        BundleConfig {
            root: self.resolve(&section.root),
            output: section.output.as_deref().map(|p| self.resolve(p)),
            source_dir: PathBuf::from(&section.source_dir),
            build_dir: PathBuf::from(&section.build_dir),
            configurations: section.configurations.clone(),
            library_extension: section.library_extension.clone(),
            extra_include_dirs: section
                .extra_include_dirs
                .iter()
                .map(PathBuf::from)
                .collect(),
            release_layout: section.release_layout,
        }
    }

    /// Expands `${VAR}` and `${VAR:-default}` references in `value`.
    fn substitute_env_vars(value: &str) -> Result<String> {
        trace!("Substituting environment variables in: {}", value);
        let pattern = Regex::new(r"\$\{([^}:]+)(?::-([^}]*))?\}")
            .map_err(|e| SungtoolError::config(e.to_string()))?;

        let mut missing: Option<String> = None;
        let substituted = pattern.replace_all(value, |cap: &Captures<'_>| {
            let var_name = &cap[1];
            match (env::var(var_name), cap.get(2)) {
                (Ok(resolved), _) => {
                    debug!("Resolved environment variable: {}", var_name);
                    resolved
                }
                (Err(_), Some(default)) => {
                    warn!(
                        "Environment variable {} not set, using default: {}",
                        var_name,
                        default.as_str()
                    );
                    default.as_str().to_string()
                }
                (Err(_), None) => {
                    missing.get_or_insert_with(|| var_name.to_string());
                    String::new()
                }
            }
        });

        match missing {
            Some(var_name) => {
                error!(
                    "Environment variable {} not set and no default provided",
                    var_name
                );
                Err(SungtoolError::EnvVarNotSet(var_name))
            }
            None => Ok(substituted.into_owned()),
        }
    }
}

fn substitute_optional(value: Option<String>) -> Result<Option<String>> {
    value
        .map(|v| SungtoolConfig::substitute_env_vars(&v))
        .transpose()
}
