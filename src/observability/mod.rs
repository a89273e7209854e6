//! Structured logging built on `tracing`.
//!
//! The core emits spans and events at `debug`/`trace` level (one span per
//! filter pass and per handled event). This module installs the subscriber
//! that turns them into log lines.
//!
//! # Configuration
//!
//! The filter is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` in the configuration file
//! 3. Default: `"info"`
//!
//! Log lines go to stderr, or to a rotating file (10 MiB, 3 backups) when
//! `log_file` is configured.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

pub mod file_writer;
pub mod init;

pub use file_writer::FileWriter;
pub use init::init_tracing;
