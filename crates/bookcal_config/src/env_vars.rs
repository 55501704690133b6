//! Environment variable naming for configuration overrides.
//!
//! A config path such as `week_strip.debounce_ms` is overridden by
//! `BOOKCAL__WEEK_STRIP__DEBOUNCE_MS`. The prefix itself can be changed with
//! the `PREFIX` environment variable.

use std::env;

/// The default prefix for configuration environment variables
pub const DEFAULT_PREFIX: &str = "BOOKCAL";

/// The separator for configuration environment variables
pub const CONFIG_SEPARATOR: &str = "__";

/// Prefix in effect for this process.
pub fn get_config_prefix() -> String {
    env::var("PREFIX").unwrap_or_else(|_| DEFAULT_PREFIX.to_string())
}

/// Environment variable that overrides `path`, e.g. `calendar.timezone`
/// becomes `BOOKCAL__CALENDAR__TIMEZONE`.
pub fn config_path_to_env_var(path: &str) -> String {
    format!(
        "{}{}{}",
        get_config_prefix(),
        CONFIG_SEPARATOR,
        path.replace('.', CONFIG_SEPARATOR)
    )
    .to_uppercase()
}

/// Inverse of [`config_path_to_env_var`]. `None` for variables without the
/// prefix.
pub fn env_var_to_config_path(name: &str) -> Option<String> {
    let prefix = format!("{}{}", get_config_prefix(), CONFIG_SEPARATOR).to_uppercase();
    let rest = name.to_uppercase().strip_prefix(&prefix)?.to_string();
    if rest.is_empty() {
        return None;
    }
    Some(rest.to_lowercase().replace(CONFIG_SEPARATOR, "."))
}

/// Config paths overridden from the environment, sorted. Values are left out
/// so the list is safe to log.
pub fn overridden_paths() -> Vec<String> {
    let mut paths: Vec<String> = env::vars()
        .filter_map(|(name, _)| env_var_to_config_path(&name))
        .collect();
    paths.sort();
    paths
}
