//! Highlight colors and ANSI escape sequence generation.
//!
//! The theme is read from the `[theme]` table of the configuration file.
//! Every color is a hex string; missing entries fall back to the Catppuccin
//! Mocha palette.
//!
//! # TOML Format
//!
//! ```toml
//! [theme]
//! match_fg = "#1e1e2e"
//! match_bg = "#f9e2af"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! plugin_fg = "#6c7086"
//! ```
//!
//! # Example
//!
//! ```rust
//! use quickpick::ui::Theme;
//!
//! let theme = Theme::default();
//! let styled = format!("{}match{}", Theme::fg(&theme.match_fg), Theme::reset());
//! assert!(styled.starts_with("\u{1b}[38;2;"));
//! ```

use serde::{Deserialize, Serialize};

/// Colors used when rendering matched rows.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Theme {
    /// Foreground of matched characters.
    pub match_fg: String,
    /// Background of matched characters.
    pub match_bg: String,
    /// Foreground of the selected row.
    pub selection_fg: String,
    /// Background of the selected row.
    pub selection_bg: String,
    /// Color of the plugin label column.
    pub plugin_fg: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            match_fg: "#1e1e2e".to_string(),
            match_bg: "#f9e2af".to_string(),
            selection_fg: "#1e1e2e".to_string(),
            selection_bg: "#f5c2e7".to_string(),
            plugin_fg: "#6c7086".to_string(),
        }
    }
}

impl Theme {
    /// Converts a hex color to an RGB tuple.
    ///
    /// Accepts an optional `#` prefix. Malformed colors render as white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// ANSI 24-bit foreground escape for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors_become_truecolor_escapes() {
        assert_eq!(Theme::fg("#ff8000"), "\u{1b}[38;2;255;128;0m");
        assert_eq!(Theme::bg("000000"), "\u{1b}[48;2;0;0;0m");
    }

    #[test]
    fn malformed_colors_fall_back_to_white() {
        assert_eq!(Theme::fg("#fff"), "\u{1b}[38;2;255;255;255m");
        assert_eq!(Theme::fg("#zz0000"), "\u{1b}[38;2;255;0;0m");
        assert_eq!(Theme::fg("#ééé"), "\u{1b}[38;2;255;255;255m");
    }

    #[test]
    fn partial_table_keeps_defaults() {
        let theme: Theme = toml::from_str("match_bg = \"#a6e3a1\"").unwrap();
        assert_eq!(theme.match_bg, "#a6e3a1");
        assert_eq!(theme.match_fg, Theme::default().match_fg);
    }
}
