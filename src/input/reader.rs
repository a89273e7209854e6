//! Line reader producing [`Item`]s.

use crate::domain::error::{PickError, Result};
use crate::domain::Item;
use std::borrow::Cow;
use std::io::BufRead;

/// Reads every line of `reader` into an item, numbering them from zero.
///
/// Both `\n` and `\r\n` line endings are accepted. Lines that are not valid
/// UTF-8 are kept, with invalid sequences replaced by `U+FFFD`. Reading blocks
/// until the stream is exhausted.
///
/// # Errors
///
/// Returns [`PickError::Io`] if reading from `reader` fails.
///
/// # Examples
///
/// ```
/// use quickpick::input::read_items;
///
/// let data = "files   . /tmp/a.txt\nplain\n";
/// let items = read_items(data.as_bytes())?;
/// assert_eq!(items.len(), 2);
/// assert_eq!(items[0].plugin, "files");
/// assert_eq!(items[1].index, 1);
/// # Ok::<(), quickpick::PickError>(())
/// ```
pub fn read_items<R: BufRead>(mut reader: R) -> Result<Vec<Item>> {
    let _span = tracing::debug_span!("read_items").entered();

    let mut items = Vec::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).map_err(PickError::Io)? == 0 {
            break;
        }

        let line = trim_line_ending(&buf);
        let index = items.len();
        let text = String::from_utf8_lossy(line);
        if matches!(text, Cow::Owned(_)) {
            tracing::warn!(line = index + 1, "line is not valid UTF-8, replacing invalid bytes");
        }
        items.push(Item::parse(&text, index));
    }

    tracing::debug!(item_count = items.len(), "items read");
    Ok(items)
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
