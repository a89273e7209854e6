//! Path resolution for the configuration file and log paths.
//!
//! Locations follow the XDG base directory convention: the configuration
//! lives under `$XDG_CONFIG_HOME/quickpick`, falling back to
//! `~/.config/quickpick` when the variable is unset or empty.

use std::env;
use std::path::PathBuf;

/// Directory name used under the platform configuration root.
pub const APP_DIR: &str = "quickpick";

/// File name of the configuration file inside [`config_dir`].
pub const CONFIG_FILE: &str = "config.toml";

/// Returns the configuration directory, or `None` when neither
/// `XDG_CONFIG_HOME` nor `HOME` is set.
///
/// # Examples
///
/// ```
/// use quickpick::infrastructure::config_dir;
///
/// if let Some(dir) = config_dir() {
///     assert!(dir.ends_with("quickpick"));
/// }
/// ```
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    resolve_config_dir(
        env::var("XDG_CONFIG_HOME").ok().as_deref(),
        env::var("HOME").ok().as_deref(),
    )
}

/// Returns the default configuration file path.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Expands a leading `~` against `$HOME`.
///
/// Paths without a leading tilde, and every path when `HOME` is unset, are
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use quickpick::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), std::path::PathBuf::from("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    expand_tilde_with(path, env::var("HOME").ok().as_deref())
}

fn resolve_config_dir(xdg_config_home: Option<&str>, home: Option<&str>) -> Option<PathBuf> {
    match (xdg_config_home.filter(|s| !s.is_empty()), home.filter(|s| !s.is_empty())) {
        (Some(xdg), _) => Some(PathBuf::from(xdg).join(APP_DIR)),
        (None, Some(home)) => Some(PathBuf::from(home).join(".config").join(APP_DIR)),
        (None, None) => None,
    }
}

fn expand_tilde_with(path: &str, home: Option<&str>) -> PathBuf {
    let Some(home) = home.filter(|h| !h.is_empty()) else {
        return PathBuf::from(path);
    };

    if path == "~" {
        PathBuf::from(home)
    } else if let Some(rest) = path.strip_prefix("~/") {
        PathBuf::from(home).join(rest)
    } else {
        PathBuf::from(path)
    }
}
