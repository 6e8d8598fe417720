//! Configuration loading and first-run initialization.
//!
//! Responsibilities:
//! - Decode an existing config file into the in-memory record.
//! - On first run, seed defaults from the environment and persist them
//!   to a newly created file.
//! - Provide the env var helper shared with path resolution.
//!
//! Does NOT handle:
//! - Resolving the platform config directory (see `path`).
//! - Validating configuration values beyond TOML type decoding.
//! - Hot-reload, schema migration, or multi-source merging.
//!
//! Invariants:
//! - Exactly one of {decode-existing, initialize-and-write} happens per
//!   `load_file` call; an existing file is never overwritten.
//! - The absent branch is taken only when the probe error is `NotFound`;
//!   any other probe failure propagates without touching the disk.
//! - Snippet-directory creation failure during first run is non-fatal
//!   (logged at WARN); a failed serialization leaves the just-created
//!   file in place without cleanup.

use std::io::{ErrorKind, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_EDITOR, DEFAULT_SELECT_CMD, ENV_EDITOR, ENV_GITHUB_TOKEN, ENV_USER,
    SNIPPET_DIR_NAME,
};
use crate::error::ConfigError;
use crate::path::{create_dir_private, default_config_path};
use crate::types::Config;

/// Read an environment variable, returning `None` if unset, empty, or
/// whitespace-only. Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

impl Config {
    /// Loads the configuration from the default platform location,
    /// creating the directory and a default config file as needed.
    pub fn load() -> Result<Self, ConfigError> {
        let path = default_config_path()?;
        let mut config = Config::default();
        config.load_file(&path)?;
        Ok(config)
    }

    /// Loads the record from `path`, or initializes `path` with defaults
    /// when no file exists there yet.
    ///
    /// With an existing file, the record is replaced wholesale by the
    /// file's contents; keys absent from the file end up at their zero
    /// values. With an absent file, defaults are seeded from the
    /// environment (`GITHUB_TOKEN`, `EDITOR`, `USER`) and written out,
    /// so every later call takes the existing-file branch.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::Stat`] when the existence probe fails for a
    ///   reason other than the file being absent.
    /// - [`ConfigError::Read`] / [`ConfigError::Parse`] for an existing
    ///   file that cannot be read or decoded. After a parse error the
    ///   record must not be used.
    /// - [`ConfigError::CreateFile`], [`ConfigError::Serialize`], or
    ///   [`ConfigError::Write`] when first-run initialization fails.
    pub fn load_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        match std::fs::metadata(path) {
            Ok(_) => self.read_existing(path),
            Err(probe) if probe.kind() == ErrorKind::NotFound => self.init_first_run(path),
            Err(source) => Err(ConfigError::Stat {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Decodes an existing config file into the record.
    fn read_existing(&mut self, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        *self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), "loaded existing config file");
        Ok(())
    }

    /// First run: creates the file at `path`, seeds the record with
    /// defaults, and serializes it to the new file.
    fn init_first_run(&mut self, path: &Path) -> Result<(), ConfigError> {
        let mut file = std::fs::File::create(path).map_err(|source| ConfigError::CreateFile {
            path: path.to_path_buf(),
            source,
        })?;

        self.gist.token = env_var_or_none(ENV_GITHUB_TOKEN).unwrap_or_default();
        self.core.editor =
            env_var_or_none(ENV_EDITOR).unwrap_or_else(|| DEFAULT_EDITOR.to_string());
        self.core.select_cmd = DEFAULT_SELECT_CMD.to_string();
        self.core.toml_file = path.to_path_buf();
        self.core.user = env_var_or_none(ENV_USER).unwrap_or_default();
        self.core.show_indicator = true;
        self.core.base_url = DEFAULT_BASE_URL.to_string();

        let snippet_dir = path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(SNIPPET_DIR_NAME);
        // Non-fatal: the snippet directory can be created later by the
        // commands that materialize files into it.
        if let Err(source) = create_dir_private(&snippet_dir) {
            warn!(
                dir = %snippet_dir.display(),
                error = %source,
                "failed to create snippet directory"
            );
        }
        self.gist.dir = snippet_dir;

        self.flag.show_spinner = true;
        self.flag.verbose = true;
        self.flag.open_url = false;
        self.flag.new_private = false;
        self.flag.open_base_url = false;
        self.screen.show_private_symbol = false;

        let rendered = toml::to_string(&*self)?;
        file.write_all(rendered.as_bytes())
            .map_err(|source| ConfigError::Write {
                path: path.to_path_buf(),
                source,
            })?;

        debug!(path = %path.display(), "wrote default config file");
        Ok(())
    }
}
