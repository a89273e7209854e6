//! View model types representing renderable picker state.
//!
//! View models are computed by [`AppState::compute_viewmodel`] and consumed
//! by whatever draws the list. They contain no logic, only display-ready
//! data: the visible window of rows, which of them is selected, highlight
//! ranges and the header counter.
//!
//! [`AppState::compute_viewmodel`]: crate::app::AppState::compute_viewmodel
//!
//! # Example
//!
//! ```rust
//! use quickpick::ui::viewmodel::{DisplayRow, HeaderInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     rows: vec![DisplayRow {
//!         view_index: 0,
//!         plugin: "files".to_string(),
//!         text: "/tmp/a.txt".to_string(),
//!         is_selected: true,
//!         highlight_ranges: vec![(0, 2)],
//!     }],
//!     first_row: 0,
//!     selected_index: 0,
//!     header: HeaderInfo { query: "/t".to_string(), matched: 1, total: 3 },
//!     scroll_to: None,
//!     empty_state: None,
//! };
//! assert_eq!(vm.header.counter(), "1/3");
//! ```

use serde::Serialize;

/// Complete view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UIViewModel {
    /// Rows inside the visible window, top to bottom.
    pub rows: Vec<DisplayRow>,

    /// View index of the first visible row.
    ///
    /// The renderer reports this back through `Event::ViewportChanged` once
    /// the frame is laid out.
    pub first_row: usize,

    /// Index of the selected row within `rows`.
    pub selected_index: usize,

    pub header: HeaderInfo,

    /// Scroll request consumed while computing this frame.
    pub scroll_to: Option<usize>,

    /// Message shown instead of rows when nothing is visible.
    pub empty_state: Option<EmptyState>,
}

/// One visible row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    /// Position of the row in the filtered view.
    pub view_index: usize,

    /// Plugin label; empty for plain items.
    pub plugin: String,

    /// Display text the query was matched against.
    pub text: String,

    pub is_selected: bool,

    /// Char ranges `(start, end)` to emphasize, end exclusive.
    ///
    /// Empty when highlighting is disabled or the query is empty.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Header above the list: the query and an fzf-style `matched/total` counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderInfo {
    pub query: String,
    pub matched: usize,
    pub total: usize,
}

impl HeaderInfo {
    #[must_use]
    pub fn counter(&self) -> String {
        format!("{}/{}", self.matched, self.total)
    }
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub message: String,
}
