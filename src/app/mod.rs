//! Application layer coordinating state, events and actions.
//!
//! Sits between the host (the CLI in `main.rs`, or an embedding UI) and the
//! picker core. Data flows one way:
//!
//! ```text
//! Input → Event → handle_event → AppState mutation → (redraw, Actions) → Host
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic
//! - [`state`]: Application state container and view model computation

pub mod actions;
pub mod handler;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use state::AppState;
