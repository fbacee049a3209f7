//! Library-wide constants.
//!
//! Centralizes display defaults and markers so the printer, the frame facade
//! and the configuration layer agree on them.

// ============================================================================
// Display Defaults
// ============================================================================

/// Rows shown by `head()` / `tail()` when no count is given
pub const DEFAULT_HEAD_ROWS: usize = 5;

/// Maximum rows rendered before the middle is elided
pub const DEFAULT_MAX_ROWS: usize = 10;

/// Maximum columns rendered before the middle is elided
pub const DEFAULT_MAX_COLS: usize = 10;

/// Upper bound on a rendered column's width in characters
pub const DEFAULT_MAX_COL_WIDTH: usize = 30;

/// Cells longer than this are cut and suffixed with [`ELLIPSIS`]
pub const DEFAULT_MAX_CELL_LENGTH: usize = 20;

// ============================================================================
// Markers
// ============================================================================

/// Marker for elided rows, columns and truncated cells
pub const ELLIPSIS: &str = "...";

/// Gap between two rendered columns
pub const COLUMN_SEPARATOR: &str = "  ";

/// Prefix for generated names of blank header fields
pub const UNNAMED_PREFIX: &str = "Unnamed: ";

// ============================================================================
// Float Summaries
// ============================================================================

/// Decimal places kept by `describe()`
pub const STATS_PRECISION: i32 = 3;
