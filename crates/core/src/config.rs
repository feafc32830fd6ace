//! Configuration paths and defaults for run-builder.
//!
//! This module provides functions for resolving the catalog file path
//! and deciding whether output should be colourised.

/// Default path for the parameter catalog file
const DEFAULT_CATALOG_PATH: &str = "~/.run-builder/catalog.yml";

/// Invocation the assembled command starts with, unless the catalog overrides it
pub const DEFAULT_PROGRAM: &str = "docker run";

/// Commands wider than this are wrapped with line continuations
pub const WRAP_WIDTH: usize = 80;

/// Environment variable that disables coloured output when non-empty
const NO_COLOR_VAR: &str = "NO_COLOR";

/// Resolves the catalog file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// catalog path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use run_builder_core::config::get_catalog_path;
///
/// let default_path = get_catalog_path(&None);
/// assert!(default_path.ends_with("catalog.yml"));
///
/// let custom_path = get_catalog_path(&Some("/path/to/catalog.yml".to_string()));
/// assert_eq!(custom_path, "/path/to/catalog.yml");
/// ```
pub fn get_catalog_path(catalog_path_arg: &Option<String>) -> String {
    let catalog_path = match catalog_path_arg {
        Some(catalog_path) => catalog_path,
        None => DEFAULT_CATALOG_PATH,
    };

    shellexpand::tilde(catalog_path).to_string()
}

/// Whether styled output should be used, honouring `--no-color` and `NO_COLOR`.
pub fn color_enabled(no_color_flag: bool) -> bool {
    let no_color_env = std::env::var(NO_COLOR_VAR).ok();
    color_enabled_from(no_color_flag, no_color_env.as_deref())
}

fn color_enabled_from(no_color_flag: bool, no_color_env: Option<&str>) -> bool {
    if no_color_flag {
        return false;
    }

    no_color_env.map_or(true, str::is_empty)
}
