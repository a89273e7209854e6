//! Shared rendering utilities.
//!
//! Highlight ranges are char-index ranges `(start, end)` with an exclusive
//! end, produced by coalescing runs of consecutive match positions. Rendering
//! works on chars, never bytes, so multi-byte text is always cut on character
//! boundaries.
//!
//! # Example
//!
//! ```rust
//! use quickpick::ui::helpers::{highlight_ranges, render_highlighted_text};
//! use quickpick::ui::Theme;
//!
//! let ranges = highlight_ranges(&[0, 1, 5]);
//! assert_eq!(ranges, vec![(0, 2), (5, 6)]);
//!
//! let plain = render_highlighted_text("my-project", &[], &Theme::default(), false);
//! assert_eq!(plain, "my-project");
//! ```

use crate::ui::theme::Theme;
use std::fmt::Write as _;

/// Coalesces strictly increasing match positions into `(start, end)` ranges.
#[must_use]
pub fn highlight_ranges(positions: &[usize]) -> Vec<(usize, usize)> {
    let mut ranges: Vec<(usize, usize)> = Vec::new();

    for &idx in positions {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }

    ranges
}

/// Renders `text` with the given char ranges emphasized by ANSI colors.
///
/// Ranges extending past the end of the text are cut short. When
/// `is_selected` is set the whole row is drawn in selection colors and the
/// match colors are re-applied on top, restoring the selection afterwards.
#[must_use]
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], theme: &Theme, is_selected: bool) -> String {
    let selection = if is_selected {
        format!("{}{}", Theme::fg(&theme.selection_fg), Theme::bg(&theme.selection_bg))
    } else {
        String::new()
    };

    if ranges.is_empty() {
        return if is_selected {
            format!("{selection}{text}{}", Theme::reset())
        } else {
            text.to_string()
        };
    }

    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + ranges.len() * 48);
    out.push_str(&selection);
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.clamp(current_pos, chars.len());
        let end = end.clamp(start, chars.len());
        if start == end {
            continue;
        }

        out.extend(&chars[current_pos..start]);
        let _ = write!(
            out,
            "{}{}{}",
            Theme::bold(),
            Theme::fg(&theme.match_fg),
            Theme::bg(&theme.match_bg)
        );
        out.extend(&chars[start..end]);
        out.push_str(Theme::reset());
        out.push_str(&selection);

        current_pos = end;
    }

    out.extend(&chars[current_pos..]);
    if is_selected {
        out.push_str(Theme::reset());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip_ansi(s: &str) -> String {
        let mut out = String::new();
        let mut in_escape = false;
        for c in s.chars() {
            match (in_escape, c) {
                (false, '\u{1b}') => in_escape = true,
                (true, 'm') => in_escape = false,
                (true, _) => {}
                (false, c) => out.push(c),
            }
        }
        out
    }

    #[test]
    fn coalesces_consecutive_positions() {
        assert_eq!(highlight_ranges(&[10, 11, 12, 13, 14]), vec![(10, 15)]);
        assert_eq!(highlight_ranges(&[0, 2, 3]), vec![(0, 1), (2, 4)]);
        assert!(highlight_ranges(&[]).is_empty());
    }

    #[test]
    fn rendering_preserves_text() {
        let theme = Theme::default();
        let text = "résumé été.txt";
        let rendered = render_highlighted_text(text, &[(0, 2), (7, 10)], &theme, false);
        assert_eq!(strip_ansi(&rendered), text);
        assert!(rendered.contains(Theme::reset()));
    }

    #[test]
    fn highlighted_section_is_wrapped() {
        let theme = Theme::default();
        let rendered = render_highlighted_text("tree.go", &[(0, 4)], &theme, false);
        let expected_prefix = format!("{}{}{}tree{}", Theme::bold(), Theme::fg(&theme.match_fg), Theme::bg(&theme.match_bg), Theme::reset());
        assert!(rendered.starts_with(&expected_prefix), "{rendered:?}");
        assert!(rendered.ends_with(".go"));
    }

    #[test]
    fn out_of_range_ranges_are_clamped() {
        let theme = Theme::default();
        let rendered = render_highlighted_text("abc", &[(1, 10), (20, 30)], &theme, true);
        assert_eq!(strip_ansi(&rendered), "abc");
    }

    #[test]
    fn selected_row_without_matches_uses_selection_colors() {
        let theme = Theme::default();
        let rendered = render_highlighted_text("abc", &[], &theme, true);
        assert!(rendered.starts_with(&Theme::fg(&theme.selection_fg)));
        assert_eq!(strip_ansi(&rendered), "abc");
    }
}
