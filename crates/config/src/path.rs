//! Path helpers for configuration file locations.
//!
//! Responsibilities:
//! - Resolve the platform-appropriate configuration root for the gist CLI.
//! - Create the configuration directory with owner-only permissions.
//!
//! Does NOT handle:
//! - Reading or writing the config file itself (see `loader`).
//! - The snippet storage directory (created during first run, see `loader`).
//!
//! Invariants:
//! - Resolution is a pure function of a platform identifier and an
//!   environment snapshot; only `default_config_dir` touches the disk.
//! - Directory creation is recursive and idempotent (a pre-existing
//!   directory is not an error).
//! - Created directories grant no group or world access on Unix.

use std::path::{Path, PathBuf};

use crate::constants::{APP_DIR_NAME, CONFIG_FILE_NAME, UNIX_CONFIG_SUBDIR, WINDOWS_APPDATA_FALLBACK};
use crate::error::ConfigError;
use crate::loader::env_var_or_none;

/// Platform family used when resolving the configuration root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Windows-class platforms (`APPDATA`-based layout).
    Windows,
    /// Everything else (`~/.config`-based layout).
    Unix,
}

impl Platform {
    /// Returns the platform the crate was compiled for.
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }
}

/// Snapshot of the environment variables that influence path resolution.
///
/// Captured once so that resolution itself stays pure and testable.
/// Empty or whitespace-only variables are treated as unset.
#[derive(Debug, Clone, Default)]
pub struct EnvPaths {
    /// Value of `HOME`, consulted on non-Windows platforms.
    pub home: Option<String>,
    /// Value of `APPDATA`, consulted first on Windows.
    pub appdata: Option<String>,
    /// Value of `USERPROFILE`, the Windows fallback when `APPDATA` is unset.
    pub userprofile: Option<String>,
}

impl EnvPaths {
    /// Captures the relevant variables from the live process environment.
    pub fn from_env() -> Self {
        Self {
            home: env_var_or_none("HOME"),
            appdata: env_var_or_none("APPDATA"),
            userprofile: env_var_or_none("USERPROFILE"),
        }
    }
}

/// Resolves the configuration root for a platform and environment snapshot.
///
/// - Windows: `%APPDATA%\gist`, or `%USERPROFILE%\Application Data\gist`
///   when `APPDATA` is unset.
/// - Everything else: `$HOME/.config/gist`.
///
/// An unset variable contributes an empty leading segment, yielding a
/// relative path rather than an error; callers that need a guaranteed
/// location should treat the environment as required.
pub fn resolve_config_root(platform: Platform, env: &EnvPaths) -> PathBuf {
    let base = match platform {
        Platform::Windows => match &env.appdata {
            Some(appdata) => PathBuf::from(appdata),
            None => {
                let profile = env.userprofile.as_deref().unwrap_or_default();
                Path::new(profile).join(WINDOWS_APPDATA_FALLBACK)
            }
        },
        Platform::Unix => {
            let home = env.home.as_deref().unwrap_or_default();
            Path::new(home).join(UNIX_CONFIG_SUBDIR)
        }
    };

    base.join(APP_DIR_NAME)
}

/// Returns the default configuration directory, creating it if needed.
///
/// The directory is created recursively with owner-only permissions.
/// Repeated calls are safe; creation is a no-op when the directory
/// already exists.
///
/// # Errors
///
/// Returns [`ConfigError::CreateDir`] when the directory cannot be
/// created; the variant carries the resolved path for diagnostics.
pub fn default_config_dir() -> Result<PathBuf, ConfigError> {
    let dir = resolve_config_root(Platform::current(), &EnvPaths::from_env());

    create_dir_private(&dir).map_err(|source| ConfigError::CreateDir {
        path: dir.clone(),
        source,
    })?;

    Ok(dir)
}

/// Returns the default path of the configuration file, creating its
/// parent directory if needed.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    Ok(default_config_dir()?.join(CONFIG_FILE_NAME))
}

/// Recursively creates a directory with owner-only permissions.
///
/// On Unix the mode is `0o700`; on other platforms the process default
/// ACLs apply. Succeeds without touching anything when the directory
/// already exists.
pub(crate) fn create_dir_private(dir: &Path) -> std::io::Result<()> {
    let mut builder = std::fs::DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o700);
    }

    builder.create(dir)
}
