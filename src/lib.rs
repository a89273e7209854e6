//! Quickpick: the core of an interactive line picker.
//!
//! Quickpick reads a list of text items, lets a user narrow it with a query,
//! and returns the chosen item's original line. It provides:
//! - Fuzzy (ordered subsequence) and exact (substring) matching with the
//!   matched character positions
//! - Optional relevance ranking from five weighted scoring factors
//! - Selection and scroll-viewport bookkeeping for a list view
//! - An event-driven application layer and render-ready view models
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  CLI (main.rs)                                      │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Event handling
//! │  - Events → state → actions                         │
//! │  - View model computation (ui/)                     │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ filter/       │   │ navigation/   │   │ input/        │
//! │ - matcher/    │   │ - selection   │   │ - line reader │
//! │ - ranker/     │   │ - scrolling   │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, Infrastructure & Observability             │
//! │  - Item model, errors (domain/)                     │
//! │  - Config paths (infrastructure/)                   │
//! │  - tracing setup, rotating log file (observability/)│
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`matcher`]: Fuzzy and exact matching with char positions
//! - [`ranker`]: Weighted relevance scoring and ordering
//! - [`filter`]: Matching and ranking combined into one view per query
//! - [`navigation`]: Selection index and scroll requests
//! - [`app`]: Application state with an event/action model
//! - [`ui`]: View models and highlight rendering
//! - [`domain`]: Items and errors
//! - [`input`]: Item ingestion from line-oriented input
//! - [`infrastructure`]: Configuration paths
//! - [`observability`]: Tracing subscriber setup
//!
//! # Configuration
//!
//! Settings are read from `$XDG_CONFIG_HOME/quickpick/config.toml` (or
//! `~/.config/quickpick/config.toml`). Every key is optional:
//!
//! ```toml
//! exact_mode = false
//! case_sensitive = false
//! rank_enabled = true
//! highlight_matches = true
//! scroll_offset = 3
//! trace_level = "debug"
//! log_file = "~/.local/state/quickpick/quickpick.log"
//!
//! [weights]
//! compactness = 35.0
//! early_match = 25.0
//!
//! [theme]
//! match_bg = "#f9e2af"
//! ```
//!
//! # Example
//!
//! ```rust
//! use quickpick::{handle_event, initialize, Action, Config, Event};
//! use quickpick::input::read_items;
//!
//! let items = read_items("retrieve.go\ntree.go\nsrc/tree_utils.go\n".as_bytes())?;
//! let config = Config { rank_enabled: true, ..Config::default() };
//! let mut state = initialize(items, &config);
//!
//! handle_event(&mut state, &Event::QueryChanged("tree".to_string()))?;
//! let (_, actions) = handle_event(&mut state, &Event::Confirm)?;
//! assert_eq!(actions, vec![Action::Output("tree.go".to_string())]);
//! # Ok::<(), quickpick::PickError>(())
//! ```

pub mod app;
pub mod domain;
pub mod filter;
pub mod infrastructure;
pub mod input;
pub mod matcher;
pub mod navigation;
pub mod observability;
pub mod ranker;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event};
pub use domain::{Item, PickError, Result};
pub use filter::{FilterPipeline, FilteredView};
pub use matcher::{match_text, Matcher};
pub use navigation::{NavigationState, Navigator};
pub use ranker::{RankWeights, Ranker, ScoredItem};
pub use ui::Theme;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Picker configuration, supplied once at startup.
///
/// Loaded from a TOML file where every field is optional; command-line
/// flags are applied on top by the binary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Match the query as a contiguous substring instead of a subsequence.
    pub exact_mode: bool,

    /// Compare characters without case folding.
    pub case_sensitive: bool,

    /// Order matches by relevance score instead of input order.
    ///
    /// Default: `false`, the input order is usually meaningful already.
    pub rank_enabled: bool,

    /// Emphasize matched characters when rendering. Default: `true`
    pub highlight_matches: bool,

    /// Rows of context kept around the selection when scrolling. Default: `3`
    pub scroll_offset: usize,

    /// Tracing filter directive, e.g. `"debug"` or `"quickpick=trace"`.
    ///
    /// Overridden by `RUST_LOG`. Default: `"info"`
    pub trace_level: Option<String>,

    /// Write logs to this file (rotated at 10 MiB) instead of stderr.
    ///
    /// A leading `~` is expanded against `$HOME`.
    pub log_file: Option<String>,

    /// Ranking weights.
    pub weights: RankWeights,

    /// Highlight colors.
    pub theme: Theme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            exact_mode: false,
            case_sensitive: false,
            rank_enabled: false,
            highlight_matches: true,
            scroll_offset: navigation::DEFAULT_SCROLL_OFFSET,
            trace_level: None,
            log_file: None,
            weights: RankWeights::default(),
            theme: Theme::default(),
        }
    }
}

impl Config {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`PickError::Config`] for malformed TOML or mistyped values.
    ///
    /// # Example
    ///
    /// ```rust
    /// use quickpick::Config;
    ///
    /// let config = Config::from_toml_str("rank_enabled = true\n[weights]\ncompactness = 50.0\n")?;
    /// assert!(config.rank_enabled);
    /// assert_eq!(config.weights.compactness, 50.0);
    /// assert_eq!(config.weights.early_match, 25.0);
    /// # Ok::<(), quickpick::PickError>(())
    /// ```
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| PickError::Config(format!("invalid configuration: {e}")))
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`PickError::Io`] when the file cannot be read and
    /// [`PickError::Config`] when it cannot be parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| PickError::Config(format!("{}: {e}", path.display())))
    }

    /// Loads the configuration from `explicit`, or from the default location.
    ///
    /// An explicit path must exist. A missing file at the default location
    /// is not an error and yields [`Config::default`].
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Config::from_file`].
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match infrastructure::default_config_path() {
            Some(path) if path.is_file() => Self::from_file(path),
            _ => Ok(Self::default()),
        }
    }

    #[must_use]
    pub const fn matcher(&self) -> Matcher {
        Matcher::new(self.case_sensitive, self.exact_mode)
    }

    /// Builds the filter pipeline, with ranking when `rank_enabled` is set.
    #[must_use]
    pub fn pipeline(&self) -> FilterPipeline {
        let ranker = self.rank_enabled.then(|| Ranker::new(self.weights));
        FilterPipeline::new(self.matcher(), ranker)
    }

    #[must_use]
    pub fn navigator(&self) -> Navigator {
        Navigator::new(self.scroll_offset)
    }
}

/// Creates the picker state for `items` under `config`.
///
/// The state starts with the empty query: every item visible in input
/// order, the first one selected.
#[must_use]
pub fn initialize(items: Vec<Item>, config: &Config) -> AppState {
    tracing::debug!(
        item_count = items.len(),
        exact = config.exact_mode,
        ranked = config.rank_enabled,
        "initializing picker"
    );

    let mut state = AppState::new(items, config.pipeline(), config.navigator());
    state.highlight_matches = config.highlight_matches;
    state.theme = config.theme.clone();
    state
}
