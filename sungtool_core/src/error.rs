use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SungtoolError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Directory walk error: {0}")]
    WalkDir(#[from] walkdir::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),

    #[error("Invalid identifier '{identifier}' in enum group '{group}'")]
    InvalidIdentifier { group: String, identifier: String },

    #[error("Enum group '{group}' has no members")]
    EmptyGroup { group: String },

    #[error("Enum group '{group}' must end with the 'eoe' sentinel member")]
    MissingSentinel { group: String },

    #[error("Duplicate member '{member}' in enum group '{group}'")]
    DuplicateMember { group: String, member: String },

    #[error("Member '{member}' in enum group '{group}' is reserved for the conversion fallback")]
    ReservedMember { group: String, member: String },

    #[error("Duplicate enum group: {group}")]
    DuplicateGroup { group: String },

    #[error("Directory not found: {path}")]
    MissingDirectory { path: PathBuf },

    #[error("Invalid path: {path}")]
    InvalidPath { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, SungtoolError>;

impl SungtoolError {
    pub fn config(message: impl Into<String>) -> Self {
        SungtoolError::Config(message.into())
    }

    pub fn invalid_identifier(group: impl Into<String>, identifier: impl Into<String>) -> Self {
        SungtoolError::InvalidIdentifier {
            group: group.into(),
            identifier: identifier.into(),
        }
    }

    pub fn duplicate_member(group: impl Into<String>, member: impl Into<String>) -> Self {
        SungtoolError::DuplicateMember {
            group: group.into(),
            member: member.into(),
        }
    }

    pub fn reserved_member(group: impl Into<String>, member: impl Into<String>) -> Self {
        SungtoolError::ReservedMember {
            group: group.into(),
            member: member.into(),
        }
    }

    pub fn missing_directory(path: impl Into<PathBuf>) -> Self {
        SungtoolError::MissingDirectory { path: path.into() }
    }

    /// True for errors caused by a malformed catalog rather than the environment.
    pub fn is_catalog_error(&self) -> bool {
        matches!(
            self,
            SungtoolError::InvalidIdentifier { .. }
                | SungtoolError::EmptyGroup { .. }
                | SungtoolError::MissingSentinel { .. }
                | SungtoolError::DuplicateMember { .. }
                | SungtoolError::ReservedMember { .. }
                | SungtoolError::DuplicateGroup { .. }
        )
    }
}
