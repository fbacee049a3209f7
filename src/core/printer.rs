//! Bounded text rendering of a store.
//!
//! Output is a header line, a dashed rule, the retained rows and a
//! `N rows x M columns` footer. Elided rows show as a single `...` line;
//! elided columns as a `...` column.

use crate::constants::{
    COLUMN_SEPARATOR, DEFAULT_MAX_CELL_LENGTH, DEFAULT_MAX_COLS, DEFAULT_MAX_COL_WIDTH,
    DEFAULT_MAX_ROWS, ELLIPSIS,
};
use crate::core::store::Store;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display caps for rendering
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrintOptions {
    pub max_rows: usize,
    pub max_cols: usize,
    pub max_col_width: usize,
    pub max_cell_length: usize,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            max_rows: DEFAULT_MAX_ROWS,
            max_cols: DEFAULT_MAX_COLS,
            max_col_width: DEFAULT_MAX_COL_WIDTH,
            max_cell_length: DEFAULT_MAX_CELL_LENGTH,
        }
    }
}

impl PrintOptions {
    /// Parse options from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Slot {
    At(usize),
    Ellipsis,
}

/// Keep the first `ceil(max / 2)` and last `floor(max / 2)` of `len` items
fn split_slots(len: usize, max: usize) -> Vec<Slot> {
    if len <= max {
        return (0..len).map(Slot::At).collect();
    }
    let top = max.div_ceil(2);
    let bottom = max / 2;
    (0..top)
        .map(Slot::At)
        .chain(std::iter::once(Slot::Ellipsis))
        .chain((len - bottom..len).map(Slot::At))
        .collect()
}

/// Cut `text` to at most `limit` characters, ending in `...` when cut.
/// Limits shorter than the marker cut without one.
pub fn truncate_cell(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let marker = ELLIPSIS.chars().count();
    if limit < marker {
        return text.chars().take(limit).collect();
    }
    let mut out: String = text.chars().take(limit - marker).collect();
    out.push_str(ELLIPSIS);
    out
}

fn render_slots(store: &Store, rows: &[Slot], cols: &[Slot], opts: &PrintOptions) -> String {
    let limit = opts.max_cell_length.min(opts.max_col_width);
    let cell = |row: usize, col: usize| -> String {
        let text = store.columns()[col].display_at(row).unwrap_or_default();
        truncate_cell(&text, limit)
    };

    let widths: Vec<usize> = cols
        .iter()
        .map(|slot| match *slot {
            Slot::At(col) => {
                let header = truncate_cell(store.columns()[col].name(), limit).chars().count();
                rows.iter()
                    .filter_map(|r| match *r {
                        Slot::At(row) => Some(cell(row, col).chars().count()),
                        Slot::Ellipsis => None,
                    })
                    .fold(header, usize::max)
            }
            Slot::Ellipsis => ELLIPSIS.len(),
        })
        .collect();

    let line = |text_at: &dyn Fn(usize) -> String| -> String {
        cols.iter()
            .zip(&widths)
            .map(|(slot, width)| match *slot {
                Slot::At(col) => format!("{:<width$}", text_at(col), width = *width),
                Slot::Ellipsis => ELLIPSIS.to_string(),
            })
            .collect::<Vec<_>>()
            .join(COLUMN_SEPARATOR)
    };

    let header = line(&|col| truncate_cell(store.columns()[col].name(), limit));
    let rule = "-".repeat(header.chars().count());
    let (n_rows, n_cols) = store.shape();

    let mut lines = vec![header, rule];
    lines.extend(rows.iter().map(|slot| match *slot {
        Slot::At(row) => line(&|col| cell(row, col)),
        Slot::Ellipsis => ELLIPSIS.to_string(),
    }));
    lines.push(format!("{n_rows} rows x {n_cols} columns"));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Render a bounded view of the whole store
pub fn render(store: &Store, opts: &PrintOptions) -> String {
    let rows = split_slots(store.row_count(), opts.max_rows);
    let cols = split_slots(store.column_count(), opts.max_cols);
    render_slots(store, &rows, &cols, opts)
}

/// Render the first `n` rows; `n` past the row count shows every row
pub fn render_head(store: &Store, n: usize, opts: &PrintOptions) -> String {
    let shown = n.min(store.row_count());
    let mut rows: Vec<Slot> = (0..shown).map(Slot::At).collect();
    if shown < store.row_count() {
        rows.push(Slot::Ellipsis);
    }
    let cols = split_slots(store.column_count(), opts.max_cols);
    render_slots(store, &rows, &cols, opts)
}

/// Render the last `n` rows; `n` past the row count shows every row
pub fn render_tail(store: &Store, n: usize, opts: &PrintOptions) -> String {
    let len = store.row_count();
    let shown = n.min(len);
    let mut rows = Vec::with_capacity(shown + 1);
    if shown < len {
        rows.push(Slot::Ellipsis);
    }
    rows.extend((len - shown..len).map(Slot::At));
    let cols = split_slots(store.column_count(), opts.max_cols);
    render_slots(store, &rows, &cols, opts)
}

impl fmt::Display for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self, &PrintOptions::default()))
    }
}
