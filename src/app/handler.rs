//! Event handling and state transition logic.
//!
//! Every interaction with the picker arrives as an [`Event`]. The handler
//! applies it to [`AppState`] synchronously and reports whether the frame
//! needs to be redrawn along with any [`Action`]s for the host.
//!
//! # Event Types
//!
//! - **Query**: `QueryChanged`
//! - **Navigation**: `MoveUp`, `MoveDown`, `ItemClicked`
//! - **Layout**: `ViewportChanged`
//! - **Completion**: `Confirm`, `ItemActivated`, `Cancel`
//!
//! # Example
//!
//! ```rust
//! use quickpick::app::{handle_event, Action, AppState, Event};
//! use quickpick::domain::Item;
//! use quickpick::filter::FilterPipeline;
//! use quickpick::navigation::Navigator;
//!
//! let items = vec![Item::plain("alpha", 0), Item::plain("beta", 1)];
//! let mut state = AppState::new(items, FilterPipeline::default(), Navigator::default());
//!
//! let (redraw, _) = handle_event(&mut state, &Event::MoveDown)?;
//! assert!(redraw);
//! let (_, actions) = handle_event(&mut state, &Event::Confirm)?;
//! assert_eq!(actions, vec![Action::Output("beta".to_string())]);
//! # Ok::<(), quickpick::PickError>(())
//! ```

use crate::app::{Action, AppState};
use crate::domain::error::Result;

/// Discrete input events fed into the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The query text now reads exactly this string.
    QueryChanged(String),
    /// Moves the selection one row up.
    MoveUp,
    /// Moves the selection one row down.
    MoveDown,
    /// A visible row was clicked; selects it.
    ItemClicked(usize),
    /// A visible row was activated (double click); selects and confirms it.
    ItemActivated(usize),
    /// The renderer laid out rows `first..first + count`.
    ViewportChanged {
        first: usize,
        count: usize,
    },
    /// Confirms the current selection.
    Confirm,
    /// Aborts without a selection.
    Cancel,
}

/// Processes an event, mutates state and returns whether to redraw plus the
/// actions to execute.
///
/// Confirming an empty view is ignored rather than treated as a
/// cancellation, so the user can keep editing the query.
///
/// # Errors
///
/// The picker core is infallible; the `Result` leaves room for hosts that
/// wrap fallible work around event handling.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::QueryChanged(query) => Ok((state.apply_query(query), vec![])),
        Event::MoveUp => {
            let before = state.navigator.selected();
            state.navigator.move_up();
            Ok((moved(state, before), vec![]))
        }
        Event::MoveDown => {
            let before = state.navigator.selected();
            state.navigator.move_down(state.view.len());
            Ok((moved(state, before), vec![]))
        }
        Event::ItemClicked(index) => Ok((state.navigator.click(*index, state.view.len()), vec![])),
        Event::ItemActivated(index) => {
            if !state.navigator.click(*index, state.view.len()) {
                return Ok((false, vec![]));
            }
            Ok((true, confirm(state)))
        }
        Event::ViewportChanged { first, count } => {
            state.navigator.report_viewport(*first, *count);
            Ok((false, vec![]))
        }
        Event::Confirm => Ok((false, confirm(state))),
        Event::Cancel => {
            tracing::debug!("selection cancelled");
            Ok((false, vec![Action::Cancelled]))
        }
    }
}

/// A move needs a redraw if it changed the selection or asked for a scroll.
fn moved(state: &AppState, before: usize) -> bool {
    state.navigator.selected() != before || state.navigator.state().needs_scroll
}

fn confirm(state: &AppState) -> Vec<Action> {
    let Some(item) = state.selected_item() else {
        tracing::debug!("nothing to confirm");
        return vec![];
    };

    tracing::debug!(index = item.index, plugin = %item.plugin, "item confirmed");
    vec![Action::Output(item.raw.clone())]
}
