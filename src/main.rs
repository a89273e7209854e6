//! Command-line front end.
//!
//! Reads items from stdin (one per line, optionally `plugin   . text`) and
//! drives the picker core non-interactively:
//!
//! - `--filter QUERY` prints every match, in view order, as raw lines (or as
//!   JSON lines with `--json`). Matched characters are highlighted when stdout
//!   is a terminal.
//! - `--select QUERY` confirms the top match and prints its raw line. Exits
//!   with status 1 when nothing matches.
//!
//! Logs go to stderr or the configured log file; stdout only ever carries
//! results.
//!
//! # Examples
//!
//! ```text
//! $ printf 'retrieve.go\ntree.go\nsrc/tree_utils.go\n' | quickpick --rank --select tree
//! tree.go
//! $ ls | quickpick --filter dwn --json
//! {"index":3,"plugin":"","text":"Downloads","raw":"Downloads","positions":[0,2,3]}
//! ```

use clap::{ArgGroup, Parser};
use quickpick::input::read_items;
use quickpick::observability::init_tracing;
use quickpick::ui::{highlight_ranges, render_highlighted_text, Theme};
use quickpick::{handle_event, initialize, Action, AppState, Config, Event, Item, Result};
use serde::Serialize;
use std::io::{self, BufWriter, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "quickpick",
    version,
    about = "Fuzzy-filter lines from stdin and pick one.",
    group(ArgGroup::new("mode").required(true).args(["filter", "select"]))
)]
struct Cli {
    /// Print every item matching QUERY.
    #[arg(long, value_name = "QUERY")]
    filter: Option<String>,

    /// Print the best item matching QUERY; exit 1 when there is none.
    #[arg(long, value_name = "QUERY")]
    select: Option<String>,

    /// With --filter, print one JSON object per match.
    #[arg(long, requires = "filter")]
    json: bool,

    /// With --filter, print at most N matches.
    #[arg(long, value_name = "N", requires = "filter")]
    limit: Option<usize>,

    /// Match the query as a contiguous substring.
    #[arg(short = 'e', long)]
    exact: bool,

    /// Order matches by relevance instead of input order.
    #[arg(long)]
    rank: bool,

    /// Do not fold case when matching.
    #[arg(long)]
    case_sensitive: bool,

    /// Never highlight matched characters.
    #[arg(long)]
    no_highlight: bool,

    /// Configuration file (default: $XDG_CONFIG_HOME/quickpick/config.toml).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

impl Cli {
    /// Applies command-line flags on top of file configuration.
    ///
    /// Flags only ever switch behavior on; an unset flag keeps the file value.
    fn apply_to(&self, config: &mut Config) {
        config.exact_mode |= self.exact;
        config.rank_enabled |= self.rank;
        config.case_sensitive |= self.case_sensitive;
        if self.no_highlight {
            config.highlight_matches = false;
        }
    }
}

/// One `--json` output line.
#[derive(Serialize)]
struct MatchRecord<'a> {
    index: usize,
    plugin: &'a str,
    text: &'a str,
    raw: &'a str,
    positions: &'a [usize],
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("quickpick: {e}");
            ExitCode::from(2)
        }
    }
}

/// Runs the selected mode and returns the process exit status.
fn run(cli: &Cli) -> Result<u8> {
    let mut config = Config::load(cli.config.as_deref())?;
    cli.apply_to(&mut config);
    init_tracing(&config);

    let items = read_items(io::stdin().lock())?;
    let mut state = initialize(items, &config);

    if let Some(query) = &cli.select {
        return select(&mut state, query);
    }

    let query = cli.filter.as_deref().unwrap_or_default();
    handle_event(&mut state, &Event::QueryChanged(query.to_string()))?;

    let stdout = io::stdout();
    let highlight = state.highlight_matches && !cli.json && stdout.is_terminal();
    let mut out = BufWriter::new(stdout.lock());
    write_matches(&mut out, &state, cli.json, highlight, cli.limit)?;
    out.flush()?;

    Ok(0)
}

fn select(state: &mut AppState, query: &str) -> Result<u8> {
    handle_event(state, &Event::QueryChanged(query.to_string()))?;
    let (_, mut actions) = handle_event(state, &Event::Confirm)?;
    if actions.is_empty() {
        tracing::info!(query, "no item matches");
        actions.push(Action::Cancelled);
    }

    let mut code = 0;
    for action in actions {
        if let Action::Output(raw) = &action {
            println!("{raw}");
        }
        code = action.exit_code();
    }
    Ok(code)
}

fn write_matches<W: Write>(
    out: &mut W,
    state: &AppState,
    json: bool,
    highlight: bool,
    limit: Option<usize>,
) -> Result<()> {
    let count = limit.map_or(state.view.len(), |n| n.min(state.view.len()));

    for view_index in 0..count {
        let Some(item) = state.view.get(view_index, &state.items) else {
            continue;
        };
        let positions = state.view.positions(view_index);

        if json {
            let record = MatchRecord {
                index: item.index,
                plugin: &item.plugin,
                text: &item.text,
                raw: &item.raw,
                positions,
            };
            let line = serde_json::to_string(&record).map_err(io::Error::from)?;
            writeln!(out, "{line}")?;
        } else if highlight {
            writeln!(out, "{}", render_raw(item, positions, state))?;
        } else {
            writeln!(out, "{}", item.raw)?;
        }
    }

    Ok(())
}

/// Renders the raw line: the plugin label in `plugin_fg`, then the text with
/// its matched characters highlighted.
fn render_raw(item: &Item, positions: &[usize], state: &AppState) -> String {
    let theme = &state.theme;
    let label = item.raw.strip_suffix(item.text.as_str()).unwrap_or_default();
    let text = render_highlighted_text(&item.text, &highlight_ranges(positions), theme, false);

    if label.is_empty() {
        text
    } else {
        format!("{}{label}{}{text}", Theme::fg(&theme.plugin_fg), Theme::reset())
    }
}
