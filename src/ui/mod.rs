//! Presentation layer: view models, highlight rendering and colors.
//!
//! The picker core never draws anything itself. Frames flow one way:
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → renderer → ViewportChanged
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable state
//! - [`helpers`]: Highlight range coalescing and ANSI rendering
//! - [`theme`]: Highlight colors and ANSI escape sequences

pub mod helpers;
pub mod theme;
pub mod viewmodel;

pub use helpers::{highlight_ranges, render_highlighted_text};
pub use theme::Theme;
pub use viewmodel::{DisplayRow, EmptyState, HeaderInfo, UIViewModel};
