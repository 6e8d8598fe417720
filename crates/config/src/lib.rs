//! Configuration management for the gist CLI.
//!
//! This crate resolves the per-platform configuration directory, loads
//! the TOML config file when one exists, and synthesizes environment-
//! seeded defaults on first run, persisting them to a newly created
//! file. It performs no network I/O and no validation beyond decoding.
//!
//! ```no_run
//! use gist_config::Config;
//!
//! let config = Config::load()?;
//! println!("editor: {}", config.core.editor);
//! # Ok::<(), gist_config::ConfigError>(())
//! ```

pub mod constants;
mod error;
mod loader;
mod path;
mod types;

pub use error::ConfigError;
pub use loader::env_var_or_none;
pub use path::{EnvPaths, Platform, default_config_dir, default_config_path, resolve_config_root};
pub use types::{Config, CoreConfig, FlagConfig, GistConfig, ScreenConfig};
