//! Filter pipeline: matcher and ranker combined into one view per query.
//!
//! Every call to [`FilterPipeline::filter`] rebuilds the [`FilteredView`] from
//! scratch. Nothing is carried over between queries, so typing one more
//! character costs the same as typing the whole query at once.
//!
//! # Algorithm
//!
//! 1. **Empty query**: every item in input order, no positions
//! 2. **Matching**: walk the items in input order and keep each match with its positions
//! 3. **Ranking** (optional): score the matches and reorder them, carrying positions along
//!
//! # Example
//!
//! ```rust
//! use quickpick::domain::Item;
//! use quickpick::filter::FilterPipeline;
//! use quickpick::matcher::Matcher;
//! use quickpick::ranker::Ranker;
//!
//! let items: Vec<Item> = ["retrieve.go", "tree.go", "src/tree_utils.go"]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, text)| Item::plain(text, i))
//!     .collect();
//!
//! let pipeline = FilterPipeline::new(Matcher::default(), Some(Ranker::default()));
//! let view = pipeline.filter(&items, "tree");
//! assert_eq!(view.get(0, &items).map(|item| item.text.as_str()), Some("tree.go"));
//! ```

use crate::domain::{Item, MatchPositions};
use crate::matcher::Matcher;
use crate::ranker::Ranker;

/// The filtered, possibly ranked, result of one query.
///
/// Stores slots into the item slice the view was computed from, plus match
/// positions in an array parallel to those slots: `positions[v]` belongs to
/// view index `v`. The positions array is empty for the empty query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredView {
    slots: Vec<usize>,
    positions: Vec<MatchPositions>,
}

impl FilteredView {
    /// The view of an empty query: every item, in input order.
    #[must_use]
    pub fn unfiltered(item_count: usize) -> Self {
        Self {
            slots: (0..item_count).collect(),
            positions: Vec::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slot in the source item slice for a view index.
    #[must_use]
    pub fn slot(&self, view_index: usize) -> Option<usize> {
        self.slots.get(view_index).copied()
    }

    /// Match positions for a view index; empty when none were recorded.
    #[must_use]
    pub fn positions(&self, view_index: usize) -> &[usize] {
        self.positions.get(view_index).map_or(&[], Vec::as_slice)
    }

    /// Item at a view index, looked up in the slice the view was built from.
    #[must_use]
    pub fn get<'a>(&self, view_index: usize, items: &'a [Item]) -> Option<&'a Item> {
        self.slot(view_index).and_then(|slot| items.get(slot))
    }

    /// Iterates the filtered items in view order.
    pub fn items<'a>(&'a self, items: &'a [Item]) -> impl Iterator<Item = &'a Item> + 'a {
        self.slots.iter().filter_map(move |&slot| items.get(slot))
    }
}

/// Orchestrates matching and optional ranking.
///
/// Built once at startup from the configured matcher and ranker; ranking is
/// enabled by passing `Some(ranker)`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FilterPipeline {
    matcher: Matcher,
    ranker: Option<Ranker>,
}

impl FilterPipeline {
    #[must_use]
    pub const fn new(matcher: Matcher, ranker: Option<Ranker>) -> Self {
        Self { matcher, ranker }
    }

    #[must_use]
    pub const fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    #[must_use]
    pub const fn is_ranked(&self) -> bool {
        self.ranker.is_some()
    }

    /// Filters `items` by `query`, ranking the matches when enabled.
    ///
    /// # Tracing
    ///
    /// Creates a debug-level span with the item count, query length and
    /// ranking flag.
    #[must_use]
    pub fn filter(&self, items: &[Item], query: &str) -> FilteredView {
        let _span = tracing::debug_span!(
            "filter",
            item_count = items.len(),
            query_len = query.len(),
            ranked = self.ranker.is_some()
        )
        .entered();

        if query.is_empty() {
            return FilteredView::unfiltered(items.len());
        }

        let mut slots = Vec::new();
        let mut positions = Vec::new();
        let mut matched: Vec<&Item> = Vec::new();

        for (slot, item) in items.iter().enumerate() {
            if let Some(found) = self.matcher.find(query, &item.text) {
                slots.push(slot);
                positions.push(found);
                if self.ranker.is_some() {
                    matched.push(item);
                }
            }
        }

        let view = match &self.ranker {
            Some(ranker) => {
                let (ranked_slots, ranked_positions): (Vec<usize>, Vec<MatchPositions>) = ranker
                    .rank_all(matched, positions, query)
                    .into_iter()
                    .map(|scored| (slots[scored.view_index], scored.positions))
                    .unzip();
                FilteredView {
                    slots: ranked_slots,
                    positions: ranked_positions,
                }
            }
            None => FilteredView { slots, positions },
        };

        tracing::debug!(matched = view.len(), "filter applied");
        view
    }
}
