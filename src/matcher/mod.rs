//! Query matching with position tracking.
//!
//! Two strategies are supported:
//!
//! - **Fuzzy** (default): the query characters must appear in the text as an
//!   ordered, not necessarily contiguous, subsequence. Placement is greedy: each
//!   query character takes the first occurrence after the previous one, which
//!   keeps matching linear in the text length at the cost of sometimes choosing
//!   a less compact placement than an optimal alignment would.
//! - **Exact**: the query must appear as a contiguous substring.
//!
//! Positions are char offsets into the original text. Case folding is applied
//! one character at a time so that offsets never shift, even for characters
//! whose lowercase form expands to several code points.
//!
//! # Example
//!
//! ```rust
//! use quickpick::matcher::Matcher;
//!
//! let fuzzy = Matcher::new(false, false);
//! assert_eq!(fuzzy.find("dwn", "Downloads/file.txt"), Some(vec![0, 2, 3]));
//!
//! let exact = Matcher::new(false, true);
//! assert_eq!(exact.find("notes", "Documents/notes.txt"), Some(vec![10, 11, 12, 13, 14]));
//! ```

use crate::domain::MatchPositions;

/// Stateless matcher configured for case sensitivity and exact/fuzzy mode.
///
/// `Matcher` is `Copy`, `Send` and `Sync`; a single instance can be shared
/// across any number of concurrent callers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Matcher {
    case_sensitive: bool,
    exact: bool,
}

impl Matcher {
    #[must_use]
    pub const fn new(case_sensitive: bool, exact: bool) -> Self {
        Self {
            case_sensitive,
            exact,
        }
    }

    #[must_use]
    pub const fn is_exact(&self) -> bool {
        self.exact
    }

    #[must_use]
    pub const fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Matches `query` against `text`.
    ///
    /// Returns the matched char positions, or `None` when the text does not
    /// match. The empty query matches every text with no positions.
    #[must_use]
    pub fn find(&self, query: &str, text: &str) -> Option<MatchPositions> {
        if query.is_empty() {
            return Some(Vec::new());
        }

        if self.exact {
            self.find_exact(query, text)
        } else {
            self.find_fuzzy(query, text)
        }
    }

    /// Greedy left-to-right subsequence scan.
    fn find_fuzzy(&self, query: &str, text: &str) -> Option<MatchPositions> {
        let mut positions = Vec::with_capacity(query.len());
        let mut text_chars = text.chars().enumerate();

        for q in query.chars() {
            let q = self.fold(q);
            let (idx, _) = text_chars.by_ref().find(|&(_, t)| self.fold(t) == q)?;
            positions.push(idx);
        }

        Some(positions)
    }

    fn find_exact(&self, query: &str, text: &str) -> Option<MatchPositions> {
        let start = if query.is_ascii() && text.is_ascii() {
            // byte offsets equal char offsets here
            let (q, t) = (query.as_bytes(), text.as_bytes());
            if q.len() > t.len() {
                return None;
            }
            if self.case_sensitive {
                text.find(query)?
            } else {
                t.windows(q.len()).position(|w| w.eq_ignore_ascii_case(q))?
            }
        } else {
            let q: Vec<char> = query.chars().map(|c| self.fold(c)).collect();
            let t: Vec<char> = text.chars().map(|c| self.fold(c)).collect();
            if q.len() > t.len() {
                return None;
            }
            t.windows(q.len()).position(|w| w == q.as_slice())?
        };

        let len = query.chars().count();
        Some((start..start + len).collect())
    }

    fn fold(&self, c: char) -> char {
        if self.case_sensitive {
            c
        } else if c.is_ascii() {
            c.to_ascii_lowercase()
        } else {
            c.to_lowercase().next().unwrap_or(c)
        }
    }
}

/// Free-function form of [`Matcher::find`].
///
/// Returns `(matched, positions)`; positions are empty on a miss.
///
/// Case-insensitive matching gives the same result as matching the
/// lowercased query against the lowercased text, except for characters whose
/// lowercase form is longer than one char (such as `'İ'`). Those fold to the
/// first char of their expansion so positions keep indexing the original
/// text, where `str::to_lowercase` would shift every later offset.
#[must_use]
pub fn match_text(query: &str, text: &str, case_sensitive: bool, exact: bool) -> (bool, MatchPositions) {
    Matcher::new(case_sensitive, exact)
        .find(query, text)
        .map_or_else(|| (false, Vec::new()), |positions| (true, positions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn is_strictly_increasing(positions: &[usize]) -> bool {
        positions.windows(2).all(|w| w[0] < w[1])
    }

    #[test]
    fn empty_query_matches_everything() {
        for exact in [false, true] {
            for case_sensitive in [false, true] {
                assert_eq!(match_text("", "anything", case_sensitive, exact), (true, vec![]));
                assert_eq!(match_text("", "", case_sensitive, exact), (true, vec![]));
            }
        }
    }

    #[test]
    fn fuzzy_simple_match() {
        assert_eq!(match_text("dwn", "Downloads/file.txt", false, false), (true, vec![0, 2, 3]));
    }

    #[test]
    fn fuzzy_no_match() {
        assert_eq!(match_text("xyz", "Downloads/file.txt", false, false), (false, vec![]));
        // order matters
        assert_eq!(match_text("nd", "dn", false, false), (false, vec![]));
    }

    #[test]
    fn fuzzy_positions_are_increasing_and_one_per_query_char() {
        let cases = [
            ("src", "src/tree_utils.go"),
            ("tu", "src/tree_utils.go"),
            ("aaa", "banana bandana"),
            ("mé", "résumé été"),
        ];
        for (query, text) in cases {
            let positions = Matcher::new(false, false).find(query, text).unwrap();
            assert_eq!(positions.len(), query.chars().count(), "{query} in {text}");
            assert!(is_strictly_increasing(&positions), "{positions:?}");
            assert!(positions.iter().all(|&p| p < text.chars().count()));
        }
    }

    #[test]
    fn fuzzy_is_greedy_not_optimal() {
        // the compact "ab" at 3..5 is skipped in favour of the first 'a'
        let positions = Matcher::new(false, false).find("ab", "a__ab").unwrap();
        assert_eq!(positions, vec![0, 4]);
    }

    #[test]
    fn exact_match_is_contiguous() {
        assert_eq!(
            match_text("notes", "Documents/notes.txt", false, true),
            (true, vec![10, 11, 12, 13, 14])
        );
        assert_eq!(match_text("dwn", "Downloads", false, true), (false, vec![]));
    }

    #[test]
    fn exact_match_uses_char_offsets_for_non_ascii() {
        let positions = Matcher::new(false, true).find("été", "résumé Été").unwrap();
        assert_eq!(positions, vec![7, 8, 9]);
    }

    #[test]
    fn case_sensitivity() {
        let sensitive = Matcher::new(true, false);
        assert_eq!(sensitive.find("D", "Downloads"), Some(vec![0]));
        assert_eq!(sensitive.find("d", "Downloads"), None);
        assert_eq!(Matcher::new(true, true).find("Notes", "notes.txt"), None);
        assert_eq!(Matcher::new(false, false).find("D", "downloads"), Some(vec![0]));
    }

    #[test]
    fn case_insensitive_equals_lowercased_inputs() {
        // none of these lowercase to more than one char; see lowercase_expansion_does_not_shift_offsets
        let cases = [
            ("DwN", "DOWNLOADS/File.txt"),
            ("NOTES", "Documents/Notes.TXT"),
            ("ÉTÉ", "Résumé Été"),
            ("Tree", "src/TREE_utils.go"),
        ];
        for exact in [false, true] {
            for (query, text) in cases {
                assert_eq!(
                    match_text(query, text, false, exact),
                    match_text(&query.to_lowercase(), &text.to_lowercase(), false, exact),
                    "{query} / {text} exact={exact}"
                );
            }
        }
    }

    #[test]
    fn query_longer_than_text_never_matches() {
        for exact in [false, true] {
            assert_eq!(match_text("treehouse", "tree", false, exact), (false, vec![]));
            assert_eq!(match_text("a", "", false, exact), (false, vec![]));
        }
    }

    #[test]
    fn lowercase_expansion_does_not_shift_offsets() {
        // 'İ' lowercases to two code points; offsets must still index the original text
        let text = "İstanbul";
        let positions = Matcher::new(false, false).find("tan", text).unwrap();
        assert_eq!(positions, vec![2, 3, 4]);
    }

    fn arb_unicode_string(max: usize) -> impl Strategy<Value = String> {
        prop::collection::vec(any::<char>(), 0..max).prop_map(|chars| chars.into_iter().collect())
    }

    /// Text paired with a subsequence of its own chars.
    fn text_and_subsequence() -> impl Strategy<Value = (String, String)> {
        prop::collection::vec((any::<char>(), any::<bool>()), 0..40).prop_map(|chars| {
            let text = chars.iter().map(|&(c, _)| c).collect();
            let query = chars.iter().filter(|&&(_, keep)| keep).map(|&(c, _)| c).collect();
            (text, query)
        })
    }

    /// Text paired with one of its contiguous slices.
    fn text_and_slice() -> impl Strategy<Value = (String, String)> {
        prop::collection::vec(any::<char>(), 1..40)
            .prop_flat_map(|chars| {
                let len = chars.len();
                (Just(chars), 0..=len, 0..=len)
            })
            .prop_map(|(chars, a, b)| {
                let (start, end) = (a.min(b), a.max(b));
                (chars.iter().collect(), chars[start..end].iter().collect())
            })
    }

    // letters whose lowercase form is a single char
    fn arb_foldable() -> impl Strategy<Value = String> {
        prop::string::string_regex("[a-zA-Z0-9éÉèÈàÀüÜß/._ -]{0,16}").unwrap()
    }

    proptest! {
        #[test]
        fn fuzzy_positions_are_valid(
            query in arb_unicode_string(8),
            text in arb_unicode_string(40),
            case_sensitive in any::<bool>(),
        ) {
            if let Some(positions) = Matcher::new(case_sensitive, false).find(&query, &text) {
                let text_len = text.chars().count();
                prop_assert_eq!(positions.len(), query.chars().count());
                prop_assert!(is_strictly_increasing(&positions));
                prop_assert!(positions.iter().all(|&p| p < text_len));
            }
        }

        #[test]
        fn fuzzy_finds_every_subsequence((text, query) in text_and_subsequence(), case_sensitive in any::<bool>()) {
            let positions = Matcher::new(case_sensitive, false).find(&query, &text);
            prop_assert!(positions.is_some(), "{:?} in {:?}", query, text);
        }

        #[test]
        fn exact_positions_are_contiguous((text, query) in text_and_slice(), case_sensitive in any::<bool>()) {
            let positions = Matcher::new(case_sensitive, true).find(&query, &text);
            prop_assert!(positions.is_some(), "{:?} in {:?}", query, text);
            let positions = positions.unwrap_or_default();
            prop_assert_eq!(positions.len(), query.chars().count());
            prop_assert!(positions.windows(2).all(|w| w[1] == w[0] + 1));
            prop_assert!(positions.last().map_or(true, |&p| p < text.chars().count()));
        }

        #[test]
        fn case_folding_matches_lowercased_inputs(
            query in arb_foldable(),
            text in arb_foldable(),
            exact in any::<bool>(),
        ) {
            prop_assert_eq!(
                match_text(&query, &text, false, exact),
                match_text(&query.to_lowercase(), &text.to_lowercase(), false, exact)
            );
        }
    }
}
