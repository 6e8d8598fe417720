//! Configuration record types for the gist CLI.
//!
//! Responsibilities:
//! - Define the `Config` record and its four TOML sections.
//! - Control the serialized key names and which fields are persisted.
//!
//! Does NOT handle:
//! - Loading, first-run initialization, or disk I/O (see `loader`).
//! - Path resolution (see `path`).
//!
//! Invariants:
//! - Every persisted field defaults to its zero value (`""`, `false`,
//!   empty path) so keys absent from the file stay zero after decoding.
//! - Session-only flags (`edit_desc`, `open_starred_items`,
//!   `from_clipboard`) are never serialized to disk.
//! - First-run defaults live in `loader`, not in `Default` impls; a
//!   freshly constructed record is all-zero.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// The configuration record, loaded once at process start.
///
/// Constructed with `Config::default()` (all-zero) and populated exactly
/// once via [`Config::load_file`](crate::Config::load_file); afterwards
/// it is mutated only by direct field assignment from CLI flag parsing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub core: CoreConfig,
    pub gist: GistConfig,
    pub flag: FlagConfig,
    pub screen: ScreenConfig,
}

/// Core settings shared by every command.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// External editor command.
    pub editor: String,
    /// Interactive selector command, as a pipe-delimited fallback chain
    /// (e.g. `"toolA:toolB"` meaning "try toolA, else toolB").
    #[serde(rename = "selectcmd")]
    pub select_cmd: String,
    /// Absolute path of the backing config file (self-referential).
    #[serde(rename = "tomlfile")]
    pub toml_file: PathBuf,
    /// Account identifier on the gist service.
    pub user: String,
    /// Whether to render the public/private indicator.
    pub show_indicator: bool,
    /// Service endpoint for the gist web UI.
    pub base_url: String,
}

/// Remote-snippet settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GistConfig {
    /// Access token for the gist service.
    pub token: String,
    /// Directory where snippet files are materialized.
    pub dir: PathBuf,
    /// File extension applied to piped-in content without a filename.
    #[serde(rename = "default_stdin_ext")]
    pub stdin_ext: String,
}

/// Default command-line behavior.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlagConfig {
    /// Show a spinner while talking to the service.
    pub show_spinner: bool,
    /// Verbose output.
    pub verbose: bool,
    /// Open the created gist in a browser.
    pub open_url: bool,
    /// Create new gists as private.
    pub new_private: bool,
    /// Open the service base URL instead of an item URL.
    pub open_base_url: bool,

    /// Reserved for future sort behavior; persisted but currently unused.
    pub sort: String,
    /// Reserved for future filter behavior; persisted but currently unused.
    pub only: String,

    /// Session-only: edit the description instead of the content.
    #[serde(skip)]
    pub edit_desc: bool,
    /// Session-only: operate on starred items.
    #[serde(skip)]
    pub open_starred_items: bool,
    /// Session-only: read content from the clipboard.
    #[serde(skip)]
    pub from_clipboard: bool,
}

/// Terminal rendering settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// Prefix private items with a marker symbol.
    pub show_private_symbol: bool,
}
