//! Centralized constants for the gist configuration crate.
//!
//! This module contains fixed names and default values used across the
//! crate to avoid magic string duplication.

// =============================================================================
// Filesystem Layout
// =============================================================================

/// Application namespace appended to the platform configuration root.
pub const APP_DIR_NAME: &str = "gist";

/// File name of the configuration file inside the application directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Name of the snippet storage directory created next to the config file.
pub const SNIPPET_DIR_NAME: &str = "files";

/// Directory segment joined under `USERPROFILE` when `APPDATA` is unset.
pub const WINDOWS_APPDATA_FALLBACK: &str = "Application Data";

/// Directory segment joined under `HOME` on non-Windows platforms.
pub const UNIX_CONFIG_SUBDIR: &str = ".config";

// =============================================================================
// First-Run Defaults
// =============================================================================

/// Editor used when the `EDITOR` environment variable is unset or empty.
pub const DEFAULT_EDITOR: &str = "vim";

/// Interactive selector fallback chain, tried left to right.
pub const DEFAULT_SELECT_CMD: &str = "fzf-tmux --multi:fzf --multi:peco";

/// Service endpoint for the gist web UI.
pub const DEFAULT_BASE_URL: &str = "https://gist.github.com";

// =============================================================================
// Environment Variables
// =============================================================================

/// Access token seeded into `gist.token` on first run.
pub const ENV_GITHUB_TOKEN: &str = "GITHUB_TOKEN";

/// External editor command seeded into `core.editor` on first run.
pub const ENV_EDITOR: &str = "EDITOR";

/// Account identifier seeded into `core.user` on first run.
pub const ENV_USER: &str = "USER";
