//! Domain layer for quickpick.
//!
//! Core types shared by every other layer, independent of how items arrive or
//! how results are displayed.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`item`]: Item model and match positions
//!
//! # Examples
//!
//! ```
//! use quickpick::domain::{Item, Result};
//!
//! fn first_item(line: &str) -> Result<Item> {
//!     Ok(Item::parse(line, 0))
//! }
//!
//! assert_eq!(first_item("tree.go").unwrap().text, "tree.go");
//! ```

pub mod error;
pub mod item;

pub use error::{PickError, Result};
pub use item::{Item, MatchPositions, PLUGIN_SEPARATOR};
