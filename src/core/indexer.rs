//! Positional 2-D selection over a store.
//!
//! Row and column selectors resolve independently; the shape of the result
//! follows how many axes were reduced to a single position.

use crate::core::column::Column;
use crate::core::store::Store;
use crate::data::{Axis, FrameError, FrameResult};
use crate::types::{Record, Value};
use std::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo};

/// One axis of an `iloc` request
///
/// Negative single positions count from the end (`-1` is the last).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selector {
    All,
    At(i64),
    Range { start: usize, end: Option<usize> },
    /// Inclusive upper bound, as written with `..=`
    Through { start: usize, last: usize },
}

impl From<usize> for Selector {
    fn from(position: usize) -> Self {
        Selector::At(position as i64)
    }
}

impl From<i64> for Selector {
    fn from(position: i64) -> Self {
        Selector::At(position)
    }
}

impl From<i32> for Selector {
    fn from(position: i32) -> Self {
        Selector::At(i64::from(position))
    }
}

impl From<Range<usize>> for Selector {
    fn from(range: Range<usize>) -> Self {
        Selector::Range {
            start: range.start,
            end: Some(range.end),
        }
    }
}

impl From<RangeInclusive<usize>> for Selector {
    fn from(range: RangeInclusive<usize>) -> Self {
        Selector::Through {
            start: *range.start(),
            last: *range.end(),
        }
    }
}

impl From<RangeFrom<usize>> for Selector {
    fn from(range: RangeFrom<usize>) -> Self {
        Selector::Range {
            start: range.start,
            end: None,
        }
    }
}

impl From<RangeTo<usize>> for Selector {
    fn from(range: RangeTo<usize>) -> Self {
        Selector::Range {
            start: 0,
            end: Some(range.end),
        }
    }
}

impl From<RangeFull> for Selector {
    fn from(_: RangeFull) -> Self {
        Selector::All
    }
}

/// A selector checked against an axis length
#[derive(Clone, Debug, PartialEq, Eq)]
enum Resolved {
    One(usize),
    Many(Range<usize>),
}

impl Resolved {
    fn into_range(self) -> Range<usize> {
        match self {
            Resolved::One(i) => i..i + 1,
            Resolved::Many(range) => range,
        }
    }
}

fn resolve(selector: &Selector, len: usize, axis: Axis) -> FrameResult<Resolved> {
    match *selector {
        Selector::All => Ok(Resolved::Many(0..len)),
        Selector::At(position) => {
            let index = if position < 0 {
                len as i64 + position
            } else {
                position
            };
            if index < 0 || index >= len as i64 {
                return Err(FrameError::Index { axis, position, len });
            }
            Ok(Resolved::One(index as usize))
        }
        Selector::Range { start, end } => bounded(start, end.unwrap_or(len), len, axis),
        Selector::Through { start, last } => match last.checked_add(1) {
            Some(end) => bounded(start, end, len, axis),
            None => Err(FrameError::Index {
                axis,
                position: i64::try_from(last).unwrap_or(i64::MAX),
                len,
            }),
        },
    }
}

/// Check a half-open `start..end` range against an axis of length `len`
fn bounded(start: usize, end: usize, len: usize, axis: Axis) -> FrameResult<Resolved> {
    let out_of_bounds = |position: usize| FrameError::Index {
        axis,
        position: i64::try_from(position).unwrap_or(i64::MAX),
        len,
    };
    if start > len {
        return Err(out_of_bounds(start));
    }
    if end > len {
        return Err(out_of_bounds(end - 1));
    }
    if start > end {
        return Err(FrameError::InvalidArgument(format!(
            "{axis} range start {start} is past its end {end}"
        )));
    }
    Ok(Resolved::Many(start..end))
}

/// Result of a positional selection
#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    /// One row, one column
    Scalar(Value),
    /// One row across several columns
    Row(Record),
    /// One column across several rows
    Column(Column),
    /// Several rows and several columns
    Table(Store),
}

impl Selection {
    pub fn as_scalar(&self) -> Option<&Value> {
        match self {
            Selection::Scalar(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_table(self) -> Option<Store> {
        match self {
            Selection::Table(store) => Some(store),
            _ => None,
        }
    }
}

/// Select `rows` × `cols` from `store`
///
/// # Errors
/// [`FrameError::Index`] when a position falls outside its axis.
pub fn select(store: &Store, rows: &Selector, cols: &Selector) -> FrameResult<Selection> {
    let row_sel = resolve(rows, store.row_count(), Axis::Row)?;
    let col_sel = resolve(cols, store.column_count(), Axis::Column)?;

    let selection = match (row_sel, col_sel) {
        (Resolved::One(row), Resolved::One(col)) => {
            let value = store.columns()[col].get(row).ok_or(FrameError::Index {
                axis: Axis::Row,
                position: row as i64,
                len: store.row_count(),
            })?;
            Selection::Scalar(value)
        }
        (Resolved::One(row), Resolved::Many(cols)) => {
            let columns = &store.columns()[cols];
            let names = columns.iter().map(|c| c.name().to_string()).collect();
            let values = columns.iter().filter_map(|c| c.get(row)).collect();
            Selection::Row(Record::new(names, values))
        }
        (Resolved::Many(rows), Resolved::One(col)) => Selection::Column(store.columns()[col].slice(rows)),
        (Resolved::Many(rows), Resolved::Many(cols)) => Selection::Table(store.slice(rows, cols)),
    };
    Ok(selection)
}

/// Like [`select`], but always materializes a store, keeping reduced axes
/// as length-one ranges.
pub fn select_store(store: &Store, rows: &Selector, cols: &Selector) -> FrameResult<Store> {
    let rows = resolve(rows, store.row_count(), Axis::Row)?.into_range();
    let cols = resolve(cols, store.column_count(), Axis::Column)?.into_range();
    Ok(store.slice(rows, cols))
}
