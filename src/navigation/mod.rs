//! Selection and scroll-viewport bookkeeping.
//!
//! [`Navigator`] owns the [`NavigationState`] and is driven by discrete
//! events: moving up or down, the filtered set changing size, the renderer
//! reporting which rows it shows, and clicks on visible rows.
//!
//! # Scroll Requests
//!
//! Movement never scrolls directly. It computes a scroll target that keeps
//! `scroll_offset` rows of context around the selection and raises the
//! one-shot `needs_scroll` flag; the renderer applies the scroll on its next
//! layout pass and clears the flag through [`Navigator::take_scroll`].
//!
//! # Contract
//!
//! Callers must run [`Navigator::reset_bounds`] whenever the filtered count
//! changes, before the next movement or render. Under that contract every
//! operation is total and `selected` is always a valid view index, or `0`
//! for an empty view.
//!
//! # Example
//!
//! ```rust
//! use quickpick::navigation::Navigator;
//!
//! let mut nav = Navigator::default();
//! nav.report_viewport(0, 10);
//! for _ in 0..7 {
//!     nav.move_down(20);
//! }
//! assert_eq!(nav.selected(), 7);
//! assert_eq!(nav.take_scroll(), Some(2));
//! assert_eq!(nav.take_scroll(), None);
//! ```

use serde::Serialize;

/// Rows of context kept visible beyond the selected row when scrolling.
pub const DEFAULT_SCROLL_OFFSET: usize = 3;

/// Snapshot of the selection and viewport.
///
/// `viewport_count` is `0` until the renderer has reported its first layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NavigationState {
    pub selected: usize,
    pub viewport_first: usize,
    pub viewport_count: usize,
    pub scroll_target: usize,
    pub needs_scroll: bool,
}

/// Navigation controller over a filtered view of `count` rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    state: NavigationState,
    scroll_offset: usize,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_OFFSET)
    }
}

impl Navigator {
    #[must_use]
    pub fn new(scroll_offset: usize) -> Self {
        Self {
            state: NavigationState::default(),
            scroll_offset,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &NavigationState {
        &self.state
    }

    #[must_use]
    pub const fn selected(&self) -> usize {
        self.state.selected
    }

    #[must_use]
    pub const fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Moves the selection one row up and requests a scroll if the
    /// look-ahead row above the selection is outside the viewport.
    pub fn move_up(&mut self) {
        let s = &mut self.state;
        if s.selected > 0 {
            s.selected -= 1;
        }

        s.scroll_target = s.selected.saturating_sub(self.scroll_offset);
        s.needs_scroll = s.scroll_target < s.viewport_first;

        tracing::trace!(selected = s.selected, scroll_target = s.scroll_target, needs_scroll = s.needs_scroll, "moved up");
    }

    /// Moves the selection one row down within `count` rows and requests a
    /// scroll if the look-ahead row below the selection is past the viewport.
    ///
    /// Before the first layout (`viewport_count == 0`) the selected row itself
    /// becomes the scroll target. Does nothing for an empty view.
    pub fn move_down(&mut self, count: usize) {
        if count == 0 {
            return;
        }

        let offset = self.scroll_offset;
        let s = &mut self.state;
        if s.selected + 1 < count {
            s.selected += 1;
        }

        if s.viewport_count == 0 {
            s.scroll_target = s.selected;
            s.needs_scroll = true;
        } else {
            let target_bottom = s.selected + offset;
            let last_visible = s.viewport_first + s.viewport_count - 1;
            if target_bottom > last_visible {
                // lands one row past the look-ahead row so it stays inside the window
                s.scroll_target = (target_bottom + 2).saturating_sub(s.viewport_count).min(count - 1);
                s.needs_scroll = true;
            }
        }

        tracing::trace!(selected = s.selected, scroll_target = s.scroll_target, needs_scroll = s.needs_scroll, "moved down");
    }

    /// Clamps the selection (and any pending scroll target) into a view of
    /// `count` rows.
    pub fn reset_bounds(&mut self, count: usize) {
        let s = &mut self.state;
        let max_index = count.saturating_sub(1);

        s.selected = s.selected.min(max_index);
        s.scroll_target = s.scroll_target.min(max_index);
        if count == 0 {
            s.needs_scroll = false;
        }
    }

    /// Records the rows the renderer currently shows.
    pub fn report_viewport(&mut self, first: usize, count: usize) {
        self.state.viewport_first = first;
        self.state.viewport_count = count;
    }

    /// Selects a clicked row directly.
    ///
    /// The row was visible when clicked, so no scroll is requested. Returns
    /// `false` and leaves the selection alone for rows outside the view.
    pub fn click(&mut self, index: usize, count: usize) -> bool {
        if index >= count {
            tracing::debug!(index, count, "ignoring click outside the view");
            return false;
        }
        self.state.selected = index;
        true
    }

    /// Consumes a pending scroll request, returning the row to scroll to.
    pub fn take_scroll(&mut self) -> Option<usize> {
        if self.state.needs_scroll {
            self.state.needs_scroll = false;
            Some(self.state.scroll_target)
        } else {
            None
        }
    }
}
