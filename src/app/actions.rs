//! Actions representing side effects requested by the event handler.
//!
//! The handler never writes output or exits by itself. It returns actions
//! and the host (the CLI, or an embedding UI) carries them out.
//!
//! # Example
//!
//! ```rust
//! use quickpick::app::Action;
//!
//! let action = Action::Output("files   . /tmp/a.txt".to_string());
//! assert_eq!(action.exit_code(), 0);
//! assert_eq!(Action::Cancelled.exit_code(), 1);
//! ```

/// Commands the host executes after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Print the confirmed item's raw line and finish successfully.
    Output(String),

    /// Finish without a selection.
    ///
    /// Nothing is printed and the process exits with failure.
    Cancelled,
}

impl Action {
    /// Process exit code for a session that ended with this action.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Output(_) => 0,
            Self::Cancelled => 1,
        }
    }
}
