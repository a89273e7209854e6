//! Error types for the quickpick adapters.
//!
//! The matching, ranking, filtering and navigation core is total and never
//! fails. Errors only arise at the edges: reading items, loading configuration
//! and driving the command line. All of them are collected in [`PickError`]
//! and implemented with `thiserror`.

use thiserror::Error;

/// The main error type for quickpick operations.
///
/// # Examples
///
/// ```
/// use quickpick::domain::PickError;
///
/// fn validate_offset(offset: i64) -> Result<(), PickError> {
///     if offset < 0 {
///         return Err(PickError::Config("scroll_offset must not be negative".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(validate_offset(-1).is_err());
/// ```
#[derive(Debug, Error)]
pub enum PickError {
    /// Reading items or a configuration file failed.
    ///
    /// Automatically converts from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or could not be parsed.
    ///
    /// The string describes the specific configuration problem, including the
    /// offending file when one is involved.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for quickpick operations.
pub type Result<T> = std::result::Result<T, PickError>;
