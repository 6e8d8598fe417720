//! Property-based tests for configuration serialization.
//!
//! These tests verify the two serialization invariants of the record
//! using randomly generated inputs:
//! - Session-only flags never appear in the serialized output.
//! - Every persisted field survives an encode/decode cycle.

use proptest::prelude::*;

use gist_config::{Config, CoreConfig, FlagConfig, GistConfig, ScreenConfig};

/// Strategy for printable strings as they would appear in config values
/// (commands, user names, extensions).
fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _:/\\.\\-]{0,40}".prop_map(String::from)
}

/// Strategy for absolute-looking paths.
fn path_strategy() -> impl Strategy<Value = std::path::PathBuf> {
    "(/[a-zA-Z0-9_\\-]{1,12}){1,4}".prop_map(std::path::PathBuf::from)
}

fn core_strategy() -> impl Strategy<Value = CoreConfig> {
    (
        value_strategy(),
        value_strategy(),
        path_strategy(),
        value_strategy(),
        any::<bool>(),
        value_strategy(),
    )
        .prop_map(
            |(editor, select_cmd, toml_file, user, show_indicator, base_url)| CoreConfig {
                editor,
                select_cmd,
                toml_file,
                user,
                show_indicator,
                base_url,
            },
        )
}

fn gist_strategy() -> impl Strategy<Value = GistConfig> {
    (value_strategy(), path_strategy(), value_strategy()).prop_map(
        |(token, dir, stdin_ext)| GistConfig {
            token,
            dir,
            stdin_ext,
        },
    )
}

fn flag_strategy() -> impl Strategy<Value = FlagConfig> {
    (
        any::<[bool; 5]>(),
        value_strategy(),
        value_strategy(),
        any::<[bool; 3]>(),
    )
        .prop_map(|(persisted, sort, only, session)| FlagConfig {
            show_spinner: persisted[0],
            verbose: persisted[1],
            open_url: persisted[2],
            new_private: persisted[3],
            open_base_url: persisted[4],
            sort,
            only,
            edit_desc: session[0],
            open_starred_items: session[1],
            from_clipboard: session[2],
        })
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        core_strategy(),
        gist_strategy(),
        flag_strategy(),
        any::<bool>(),
    )
        .prop_map(|(core, gist, flag, show_private_symbol)| Config {
            core,
            gist,
            flag,
            screen: ScreenConfig {
                show_private_symbol,
            },
        })
}

proptest! {
    /// The three session-only flags must never leak into the file format,
    /// no matter what state the record holds.
    #[test]
    fn session_only_flags_never_serialized(config in config_strategy()) {
        let rendered = toml::to_string(&config).unwrap();

        prop_assert!(!rendered.contains("edit_desc"));
        prop_assert!(!rendered.contains("open_starred_items"));
        prop_assert!(!rendered.contains("from_clipboard"));
    }

    /// Every persisted field survives an encode/decode cycle; the
    /// session-only flags come back at their zero value.
    #[test]
    fn persisted_fields_survive_round_trip(config in config_strategy()) {
        let rendered = toml::to_string(&config).unwrap();
        let decoded: Config = toml::from_str(&rendered).unwrap();

        prop_assert_eq!(&decoded.core, &config.core);
        prop_assert_eq!(&decoded.gist, &config.gist);
        prop_assert_eq!(&decoded.screen, &config.screen);

        prop_assert_eq!(decoded.flag.show_spinner, config.flag.show_spinner);
        prop_assert_eq!(decoded.flag.verbose, config.flag.verbose);
        prop_assert_eq!(decoded.flag.open_url, config.flag.open_url);
        prop_assert_eq!(decoded.flag.new_private, config.flag.new_private);
        prop_assert_eq!(decoded.flag.open_base_url, config.flag.open_base_url);
        prop_assert_eq!(&decoded.flag.sort, &config.flag.sort);
        prop_assert_eq!(&decoded.flag.only, &config.flag.only);

        prop_assert!(!decoded.flag.edit_desc);
        prop_assert!(!decoded.flag.open_starred_items);
        prop_assert!(!decoded.flag.from_clipboard);
    }
}
