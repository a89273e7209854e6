//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for one picker session: the
//! items read at startup, the current query, the filtered view computed for
//! it and the navigator tracking selection and scrolling.
//!
//! # Consistency
//!
//! The filtered view and the navigator are only ever changed together:
//! every query change re-filters and then clamps the navigator to the new
//! view length, so `selected` always names a row of the current view.
//!
//! # Example
//!
//! ```rust
//! use quickpick::app::AppState;
//! use quickpick::domain::Item;
//! use quickpick::filter::FilterPipeline;
//! use quickpick::navigation::Navigator;
//!
//! let items = vec![Item::plain("alpha", 0), Item::plain("beta", 1)];
//! let mut state = AppState::new(items, FilterPipeline::default(), Navigator::default());
//! state.apply_query("bt");
//! assert_eq!(state.selected_item().map(|i| i.text.as_str()), Some("beta"));
//! ```

use crate::domain::Item;
use crate::filter::{FilterPipeline, FilteredView};
use crate::navigation::Navigator;
use crate::ui::helpers::highlight_ranges;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DisplayRow, EmptyState, HeaderInfo, UIViewModel};

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Every item read from the input, in input order.
    pub items: Vec<Item>,

    /// Query the current view was computed for.
    pub query: String,

    /// Filtered (and possibly ranked) view of `items` for `query`.
    pub view: FilteredView,

    /// Selection and scroll bookkeeping over `view`.
    pub navigator: Navigator,

    pub pipeline: FilterPipeline,

    /// Whether view models carry highlight ranges for matched characters.
    pub highlight_matches: bool,

    /// Colors for terminal rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates a state showing every item, with the first one selected.
    #[must_use]
    pub fn new(items: Vec<Item>, pipeline: FilterPipeline, navigator: Navigator) -> Self {
        let view = FilteredView::unfiltered(items.len());
        Self {
            items,
            query: String::new(),
            view,
            navigator,
            pipeline,
            highlight_matches: true,
            theme: Theme::default(),
        }
    }

    /// Number of rows in the current view.
    #[must_use]
    pub fn filtered_count(&self) -> usize {
        self.view.len()
    }

    /// Re-filters for `query` and clamps the selection into the new view.
    ///
    /// Returns `false`, doing nothing, when `query` equals the current query.
    ///
    /// # Tracing
    ///
    /// Creates a debug-level span with the total item count and query length.
    pub fn apply_query(&mut self, query: &str) -> bool {
        if query == self.query {
            return false;
        }

        let _span = tracing::debug_span!(
            "apply_query",
            total_items = self.items.len(),
            query_len = query.len()
        )
        .entered();

        query.clone_into(&mut self.query);
        self.view = self.pipeline.filter(&self.items, &self.query);
        self.navigator.reset_bounds(self.view.len());

        tracing::debug!(
            filtered_count = self.view.len(),
            selected = self.navigator.selected(),
            "query applied"
        );
        true
    }

    /// Returns the currently selected item, if the view is not empty.
    #[must_use]
    pub fn selected_item(&self) -> Option<&Item> {
        self.view.get(self.navigator.selected(), &self.items)
    }

    /// Computes the frame for a list area `height` rows tall.
    ///
    /// The window starts at a pending scroll target if there is one (the
    /// request is consumed and reported in `scroll_to`), otherwise at the
    /// last reported viewport. It is then shifted as little as possible so
    /// that it stays inside the view and contains the selected row. The
    /// chosen window is reported back to the navigator, so the next frame
    /// starts from it.
    #[must_use]
    pub fn compute_viewmodel(&mut self, height: usize) -> UIViewModel {
        let len = self.view.len();
        let scroll_to = self.navigator.take_scroll();
        let nav = *self.navigator.state();

        let header = HeaderInfo {
            query: self.query.clone(),
            matched: len,
            total: self.items.len(),
        };

        if len == 0 || height == 0 {
            let empty_state = (len == 0).then(|| EmptyState {
                message: String::from(if self.items.is_empty() { "No items" } else { "No matches" }),
            });
            return UIViewModel {
                rows: Vec::new(),
                first_row: 0,
                selected_index: 0,
                header,
                scroll_to,
                empty_state,
            };
        }

        let mut first = scroll_to.unwrap_or(nav.viewport_first).min(len.saturating_sub(height));
        if nav.selected < first {
            first = nav.selected;
        } else if nav.selected >= first + height {
            first = nav.selected + 1 - height;
        }
        let last = (first + height).min(len);
        self.navigator.report_viewport(first, last - first);

        let highlight = self.highlight_matches && !self.query.is_empty();
        let rows = (first..last)
            .filter_map(|view_index| {
                let item = self.view.get(view_index, &self.items)?;
                Some(DisplayRow {
                    view_index,
                    plugin: item.plugin.clone(),
                    text: item.text.clone(),
                    is_selected: view_index == nav.selected,
                    highlight_ranges: if highlight {
                        highlight_ranges(self.view.positions(view_index))
                    } else {
                        Vec::new()
                    },
                })
            })
            .collect();

        UIViewModel {
            rows,
            first_row: first,
            selected_index: nav.selected - first,
            header,
            scroll_to,
            empty_state: None,
        }
    }
}
