//! Tracing initialization and subscriber setup.

use super::file_writer::FileWriter;
use crate::infrastructure::expand_tilde;
use crate::Config;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when neither `RUST_LOG` nor `trace_level` is set.
const DEFAULT_LEVEL: &str = "info";

/// Initializes the global tracing subscriber.
///
/// # Filter Resolution
///
/// 1. `RUST_LOG` environment variable
/// 2. `config.trace_level`
/// 3. Default: `"info"`
///
/// An unparsable `trace_level` falls back to the default.
///
/// # Output
///
/// Stdout is reserved for the selection, so events go to stderr, or to
/// `config.log_file` through a [`FileWriter`] when one is configured. If the
/// log file's directory cannot be created, stderr is used instead.
///
/// # Initialization Behavior
///
/// Idempotent: only the first call installs a subscriber, later calls are
/// no-ops.
///
/// # Example
///
/// ```rust
/// use quickpick::observability::init_tracing;
/// use quickpick::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
    });

    let registry = tracing_subscriber::registry().with(filter);

    let _ = match config.log_file.as_deref().and_then(open_log_file) {
        Some(writer) => registry
            .with(fmt::layer().with_ansi(false).with_writer(Arc::new(writer)))
            .try_init(),
        None => registry.with(fmt::layer().with_writer(std::io::stderr)).try_init(),
    };
}

fn open_log_file(path: &str) -> Option<FileWriter> {
    let path: PathBuf = expand_tilde(path);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("quickpick: cannot create log directory {}: {e}", parent.display());
            return None;
        }
    }

    Some(FileWriter::new(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_directory_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("pick.log");

        let writer = open_log_file(path.to_str().unwrap()).unwrap();
        assert_eq!(writer.path(), path.as_path());
        assert!(dir.path().join("nested").is_dir());
    }

    #[test]
    fn uncreatable_directory_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "x").unwrap();

        let path = blocker.join("pick.log");
        assert!(open_log_file(path.to_str().unwrap()).is_none());
    }
}
