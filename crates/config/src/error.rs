//! Error types for configuration loading and first-run initialization.
//!
//! Responsibilities:
//! - Define one error variant per failure stage of the config lifecycle.
//! - Carry the affected path and the underlying I/O or codec error.
//!
//! Does NOT handle:
//! - Recovery or retries (every error passes through to the caller).
//! - Logging (callers and the loader decide what to report).
//!
//! Invariants:
//! - Filesystem variants always include the path that was being touched,
//!   so a failed directory or file operation stays diagnosable.
//! - A `Parse` error means the on-disk file was found but rejected; the
//!   in-memory record must not be used afterwards.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while resolving, loading, or initializing the
/// configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform configuration directory could not be created.
    #[error("Failed to create config directory at {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The existence probe failed for a reason other than "not found".
    #[error("Failed to stat config file at {path}: {source}")]
    Stat {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An existing config file could not be read.
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An existing config file was read but is not valid TOML for the
    /// configuration schema.
    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// The config file could not be created on first run.
    #[error("Failed to create config file at {path}: {source}")]
    CreateFile {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The default configuration could not be encoded as TOML.
    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The encoded defaults could not be written to the new config file.
    #[error("Failed to write config file at {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Returns the filesystem path this error refers to, when it has one.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::CreateDir { path, .. }
            | Self::Stat { path, .. }
            | Self::Read { path, .. }
            | Self::Parse { path, .. }
            | Self::CreateFile { path, .. }
            | Self::Write { path, .. } => Some(path),
            Self::Serialize(_) => None,
        }
    }
}
