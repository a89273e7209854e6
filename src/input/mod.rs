//! Item ingestion.
//!
//! Turns a line-oriented byte stream (normally stdin) into the immutable item
//! set the picker works on.

pub mod reader;

pub use reader::read_items;
