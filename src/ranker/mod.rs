//! Relevance scoring for matched items.
//!
//! Every match is scored as a weighted sum of five independent factors, each
//! normalized to `0.0..=1.0`:
//!
//! ```text
//! compactness   = len(query) / (last - first + 1)
//! early match   = 1 / (first + 1)
//! consecutive   = adjacent_pairs / (len(positions) - 1)     (0 for one position)
//! length ratio  = len(query) / len(text)
//! original pos  = max(0, 1 - original_index / 10000)
//! ```
//!
//! With the default weights (35/25/20/10/10) a perfect score is 100. Lengths
//! are counted in chars, matching the char offsets produced by the matcher.
//!
//! Ranking sorts by descending score. Equal scores are ordered by ascending
//! original index, so the result never depends on sort stability.

use crate::domain::{Item, MatchPositions};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Number of items over which the original-position preference decays to zero.
const POSITION_HORIZON: f64 = 10_000.0;

/// Weights for the five scoring factors.
///
/// Loadable from the `[weights]` table of the configuration file; missing
/// entries keep their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankWeights {
    /// How tightly grouped the matched characters are.
    pub compactness: f64,
    /// Bonus for matches starting near the beginning of the text.
    pub early_match: f64,
    /// Share of matched characters that directly follow the previous one.
    pub consecutive: f64,
    /// Query length relative to text length.
    pub length_ratio: f64,
    /// Preference for items that came earlier in the input.
    pub original_position: f64,
}

impl Default for RankWeights {
    fn default() -> Self {
        Self {
            compactness: 35.0,
            early_match: 25.0,
            consecutive: 20.0,
            length_ratio: 10.0,
            original_position: 10.0,
        }
    }
}

/// A matched item together with its relevance score.
///
/// Produced only by [`Ranker::rank_all`] and recomputed on every query.
/// `view_index` is the item's position in the batch handed to `rank_all`,
/// which lets the caller map a ranked entry back to where it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredItem<'a> {
    pub item: &'a Item,
    pub score: f64,
    pub positions: MatchPositions,
    pub original_index: usize,
    #[serde(skip)]
    pub view_index: usize,
}

/// Scores and sorts matches.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Ranker {
    weights: RankWeights,
}

impl Ranker {
    #[must_use]
    pub const fn new(weights: RankWeights) -> Self {
        Self { weights }
    }

    #[must_use]
    pub const fn weights(&self) -> &RankWeights {
        &self.weights
    }

    /// Computes the relevance score of one match.
    ///
    /// Returns `0.0` when `positions` is empty (the empty query).
    ///
    /// # Examples
    ///
    /// ```
    /// use quickpick::ranker::Ranker;
    ///
    /// let ranker = Ranker::default();
    /// let tight = ranker.score("tree", "tree.go", &[0, 1, 2, 3], 0);
    /// let loose = ranker.score("tree", "retrieve.go", &[2, 3, 5, 7], 0);
    /// assert!(tight > loose);
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn score(&self, query: &str, text: &str, positions: &[usize], original_index: usize) -> f64 {
        let (Some(&first), Some(&last)) = (positions.first(), positions.last()) else {
            return 0.0;
        };

        let query_len = query.chars().count() as f64;
        let text_len = text.chars().count().max(1) as f64;
        let w = &self.weights;

        let span = (last - first + 1) as f64;
        let compactness = query_len / span;

        let early_match = 1.0 / (first + 1) as f64;

        let consecutive = if positions.len() > 1 {
            let pairs = positions.windows(2).filter(|p| p[1] == p[0] + 1).count();
            pairs as f64 / (positions.len() - 1) as f64
        } else {
            0.0
        };

        let length_ratio = query_len / text_len;

        let original_position = (1.0 - original_index as f64 / POSITION_HORIZON).max(0.0);

        compactness * w.compactness
            + early_match * w.early_match
            + consecutive * w.consecutive
            + length_ratio * w.length_ratio
            + original_position * w.original_position
    }

    /// Scores a batch of matches and sorts it by descending relevance.
    ///
    /// `items` and `positions` are parallel: `positions[i]` belongs to
    /// `items[i]`. Each returned [`ScoredItem`] carries its own positions, so
    /// the caller can rebuild a view in rank order without any lookup.
    #[must_use]
    pub fn rank_all<'a>(
        &self,
        items: Vec<&'a Item>,
        positions: Vec<MatchPositions>,
        query: &str,
    ) -> Vec<ScoredItem<'a>> {
        debug_assert_eq!(items.len(), positions.len());

        let mut scored: Vec<ScoredItem<'a>> = items
            .into_iter()
            .zip(positions)
            .enumerate()
            .map(|(view_index, (item, positions))| ScoredItem {
                score: self.score(query, &item.text, &positions, item.index),
                item,
                positions,
                original_index: item.index,
                view_index,
            })
            .collect();

        scored.sort_unstable_by(compare_scored);

        tracing::trace!(ranked = scored.len(), "matches ranked");
        scored
    }
}

/// Descending score, then ascending original index.
fn compare_scored(a: &ScoredItem<'_>, b: &ScoredItem<'_>) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.original_index.cmp(&b.original_index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::Matcher;
    use proptest::prelude::*;

    const EPSILON: f64 = 1e-9;

    fn item(text: &str, index: usize) -> Item {
        Item::plain(text, index)
    }

    #[test]
    fn perfect_match_scores_full_weights() {
        let ranker = Ranker::default();
        let score = ranker.score("tree", "tree", &[0, 1, 2, 3], 0);
        assert!((score - 100.0).abs() < EPSILON, "{score}");
    }

    #[test]
    fn factors_follow_formulas() {
        let ranker = Ranker::default();
        // span 6, first 2, one adjacent pair out of three, 11 chars, index 5000
        let score = ranker.score("tree", "retrieve.go", &[2, 3, 5, 7], 5000);
        let expected = 4.0 / 6.0 * 35.0 + 1.0 / 3.0 * 25.0 + 1.0 / 3.0 * 20.0 + 4.0 / 11.0 * 10.0 + 0.5 * 10.0;
        assert!((score - expected).abs() < EPSILON, "{score} vs {expected}");
    }

    #[test]
    fn empty_positions_score_zero() {
        assert_eq!(Ranker::default().score("", "anything", &[], 0), 0.0);
    }

    #[test]
    fn single_position_has_no_consecutive_bonus() {
        let weights = RankWeights {
            compactness: 0.0,
            early_match: 0.0,
            consecutive: 100.0,
            length_ratio: 0.0,
            original_position: 0.0,
        };
        assert_eq!(Ranker::new(weights).score("t", "tree", &[0], 0), 0.0);
    }

    #[test]
    fn original_position_bonus_bottoms_out_at_zero() {
        let weights = RankWeights {
            compactness: 0.0,
            early_match: 0.0,
            consecutive: 0.0,
            length_ratio: 0.0,
            original_position: 10.0,
        };
        let ranker = Ranker::new(weights);
        assert!((ranker.score("a", "a", &[0], 0) - 10.0).abs() < EPSILON);
        assert!((ranker.score("a", "a", &[0], 5_000) - 5.0).abs() < EPSILON);
        assert_eq!(ranker.score("a", "a", &[0], 50_000), 0.0);
    }

    #[test]
    fn contiguous_early_match_beats_spread_late_match() {
        let ranker = Ranker::default();
        // same query, same text length, same original index
        let tight = ranker.score("abc", "abcxxxxxxx", &[0, 1, 2], 7);
        let spread = ranker.score("abc", "xxaxxbxxcx", &[2, 5, 8], 7);
        assert!(tight > spread);
    }

    #[test]
    fn rank_all_sorts_descending() {
        let items = [item("retrieve.go", 0), item("tree.go", 1), item("src/tree_utils.go", 2)];
        let positions = vec![vec![2, 3, 5, 7], vec![0, 1, 2, 3], vec![4, 5, 6, 7]];
        let ranked = Ranker::default().rank_all(items.iter().collect(), positions, "tree");

        let order: Vec<&str> = ranked.iter().map(|s| s.item.text.as_str()).collect();
        assert_eq!(order, vec!["tree.go", "src/tree_utils.go", "retrieve.go"]);
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
        assert_eq!(ranked[0].positions, vec![0, 1, 2, 3]);
        assert_eq!(ranked[0].original_index, 1);
        let view_indices: Vec<usize> = ranked.iter().map(|s| s.view_index).collect();
        assert_eq!(view_indices, vec![1, 2, 0]);
    }

    #[test]
    fn ties_break_by_original_index() {
        let weights = RankWeights {
            original_position: 0.0,
            ..RankWeights::default()
        };
        let items = [item("same", 9), item("same", 2), item("same", 5)];
        let positions = vec![vec![0], vec![0], vec![0]];
        let ranked = Ranker::new(weights).rank_all(items.iter().collect(), positions, "s");

        let indices: Vec<usize> = ranked.iter().map(|s| s.original_index).collect();
        assert_eq!(indices, vec![2, 5, 9]);
    }

    #[test]
    fn rank_all_of_nothing_is_empty() {
        assert!(Ranker::default().rank_all(Vec::new(), Vec::new(), "q").is_empty());
    }

    proptest! {
        #[test]
        fn rank_all_orders_any_batch(
            query in "[a-e]{1,4}",
            texts in prop::collection::vec("[a-e/._]{0,24}", 0..60),
            index_step in 1usize..400,
        ) {
            let matcher = Matcher::new(false, false);
            let items: Vec<Item> = texts
                .iter()
                .enumerate()
                .map(|(i, text)| item(text, i * index_step))
                .collect();
            let (matched, positions): (Vec<&Item>, Vec<MatchPositions>) = items
                .iter()
                .filter_map(|it| matcher.find(&query, &it.text).map(|p| (it, p)))
                .unzip();
            let matched_count = matched.len();

            let ranked = Ranker::default().rank_all(matched, positions, &query);

            prop_assert_eq!(ranked.len(), matched_count);
            for pair in ranked.windows(2) {
                prop_assert!(pair[0].score >= pair[1].score);
                if pair[0].score == pair[1].score {
                    prop_assert!(pair[0].original_index < pair[1].original_index);
                }
            }
            for scored in &ranked {
                prop_assert!((0.0..=100.0 + EPSILON).contains(&scored.score), "{}", scored.score);
                prop_assert_eq!(&scored.positions, &matcher.find(&query, &scored.item.text).unwrap_or_default());
            }

            let mut view_indices: Vec<usize> = ranked.iter().map(|s| s.view_index).collect();
            view_indices.sort_unstable();
            prop_assert_eq!(view_indices, (0..matched_count).collect::<Vec<_>>());
        }
    }
}
