//! Infrastructure layer for filesystem and environment interactions.
//!
//! Resolves where the configuration file lives and expands user paths such
//! as a configured log file.

pub mod paths;

pub use paths::{config_dir, default_config_path, expand_tilde};
