//! Item domain model.
//!
//! An [`Item`] is one selectable line of input. Items are created once during
//! ingestion and never mutated afterwards; every filtered or ranked view refers
//! back to them through their original `index`.

use serde::{Deserialize, Serialize};

/// Separator between the plugin name and the item text: three spaces, a dot, a space.
pub const PLUGIN_SEPARATOR: &str = "   . ";

/// Ordered char offsets into an item's `text` where the query matched.
///
/// Always strictly increasing. An empty sequence is only produced for the
/// empty query, which matches everything.
pub type MatchPositions = Vec<usize>;

/// A single selectable item.
///
/// # Fields
///
/// - `plugin`: Source tag before the separator (e.g. `"files"`), empty when absent
/// - `text`: The part that is matched, ranked and displayed
/// - `raw`: The untouched input line, emitted on selection
/// - `index`: 0-based position in the original input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub plugin: String,
    pub text: String,
    pub raw: String,
    pub index: usize,
}

impl Item {
    /// Parses one input line into an item.
    ///
    /// A line of the form `"plugin   . text"` is split at the first separator;
    /// the plugin name is trimmed and the remainder is kept verbatim. Lines
    /// without the separator become plain items with an empty plugin.
    ///
    /// # Examples
    ///
    /// ```
    /// use quickpick::domain::Item;
    ///
    /// let item = Item::parse("files   . /home/user/notes.txt", 3);
    /// assert_eq!(item.plugin, "files");
    /// assert_eq!(item.text, "/home/user/notes.txt");
    /// assert_eq!(item.raw, "files   . /home/user/notes.txt");
    /// assert_eq!(item.index, 3);
    ///
    /// let plain = Item::parse("plain text item", 0);
    /// assert_eq!(plain.plugin, "");
    /// assert_eq!(plain.text, "plain text item");
    /// ```
    #[must_use]
    pub fn parse(line: &str, index: usize) -> Self {
        match line.split_once(PLUGIN_SEPARATOR) {
            Some((plugin, text)) => Self {
                plugin: plugin.trim().to_string(),
                text: text.to_string(),
                raw: line.to_string(),
                index,
            },
            None => Self::plain(line, index),
        }
    }

    /// Creates an item whose text and raw line are both `text`.
    #[must_use]
    pub fn plain(text: &str, index: usize) -> Self {
        Self {
            plugin: String::new(),
            text: text.to_string(),
            raw: text.to_string(),
            index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_only_at_first_separator() {
        let item = Item::parse("cmd   . echo a   . b", 1);
        assert_eq!(item.plugin, "cmd");
        assert_eq!(item.text, "echo a   . b");
    }

    #[test]
    fn trims_plugin_but_not_text() {
        let item = Item::parse("  chrome   .  https://example.com ", 0);
        assert_eq!(item.plugin, "chrome");
        assert_eq!(item.text, " https://example.com ");
        assert_eq!(item.raw, "  chrome   .  https://example.com ");
    }

    #[test]
    fn near_miss_separator_is_plain_text() {
        let item = Item::parse("files  . two spaces only", 4);
        assert_eq!(item.plugin, "");
        assert_eq!(item.text, "files  . two spaces only");
        assert_eq!(item.index, 4);
    }

    #[test]
    fn empty_line_is_an_empty_item() {
        let item = Item::parse("", 9);
        assert_eq!(item, Item::plain("", 9));
    }
}
