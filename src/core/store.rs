//! Immutable columnar store.
//!
//! A [`Store`] is an ordered set of uniquely named, equally long columns.
//! Nothing mutates a store after construction; every transformation builds
//! a new one, so any handle to an old store stays consistent.

use crate::constants::UNNAMED_PREFIX;
use crate::core::column::{Column, ColumnData};
use crate::data::inference::infer_column_dtype;
use crate::data::{Axis, FrameError, FrameResult};
use crate::types::{ElementType, Record, Value};
use std::collections::HashSet;
use std::ops::Range;

/// One table snapshot: same-length columns plus the shared row count
#[derive(Clone, Debug, PartialEq)]
pub struct Store {
    columns: Vec<Column>,
    row_count: usize,
}

impl Store {
    /// Build a store from raw text rows, inferring each column's type
    ///
    /// # Errors
    /// - [`FrameError::EmptyInput`] if `header` or `rows` is empty
    /// - [`FrameError::Format`] if a row's width differs from the header's
    /// - [`FrameError::Schema`] if the header repeats a name
    pub fn from_rows<H, R, C>(header: H, rows: R) -> FrameResult<Self>
    where
        H: IntoIterator,
        H::Item: Into<String>,
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        let (header, rows) = collect_input(header, rows)?;
        assemble(header, rows, None)
    }

    /// Build a store from raw text rows with caller-declared column types
    ///
    /// # Errors
    /// As [`Store::from_rows`], plus [`FrameError::Format`] if `dtypes` does
    /// not match the header width and [`FrameError::TypeCoercion`] if a cell
    /// cannot be read as its declared type.
    pub fn from_typed_rows<H, R, C>(header: H, dtypes: &[ElementType], rows: R) -> FrameResult<Self>
    where
        H: IntoIterator,
        H::Item: Into<String>,
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        let (header, rows) = collect_input(header, rows)?;
        assemble(header, rows, Some(dtypes))
    }

    /// Assemble a store from already-typed columns
    pub fn from_columns(columns: Vec<Column>) -> FrameResult<Self> {
        let Some(first) = columns.first() else {
            return Err(FrameError::EmptyInput("no columns given".into()));
        };
        let row_count = first.len();
        if let Some(bad) = columns.iter().find(|c| c.len() != row_count) {
            return Err(FrameError::Format(format!(
                "column '{}' has {} rows, expected {}",
                bad.name(),
                bad.len(),
                row_count
            )));
        }
        ensure_unique(columns.iter().map(Column::name))?;
        Ok(Self { columns, row_count })
    }

    /// Caller guarantees unique names and `row_count` matching every column.
    pub(crate) fn from_parts(columns: Vec<Column>, row_count: usize) -> Self {
        debug_assert!(columns.iter().all(|c| c.len() == row_count));
        Self { columns, row_count }
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.row_count, self.columns.len())
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    /// Ordered (name, type) pairs
    pub fn schema(&self) -> Vec<(String, ElementType)> {
        self.columns
            .iter()
            .map(|c| (c.name().to_string(), c.dtype()))
            .collect()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name() == name)
    }

    /// Column by label
    pub fn column(&self, name: &str) -> FrameResult<&Column> {
        self.position(name)
            .map(|i| &self.columns[i])
            .ok_or_else(|| FrameError::Schema(format!("column '{name}' does not exist")))
    }

    /// Column by position
    pub fn column_at(&self, index: usize) -> FrameResult<&Column> {
        self.columns.get(index).ok_or(FrameError::Index {
            axis: Axis::Column,
            position: index as i64,
            len: self.columns.len(),
        })
    }

    /// Owned copy of one row
    pub fn row(&self, index: usize) -> FrameResult<Record> {
        if index >= self.row_count {
            return Err(FrameError::Index {
                axis: Axis::Row,
                position: index as i64,
                len: self.row_count,
            });
        }
        let names = self.columns.iter().map(|c| c.name().to_string()).collect();
        let values = self.columns.iter().filter_map(|c| c.get(index)).collect();
        Ok(Record::new(names, values))
    }

    /// Single cell by row position and column label
    pub fn value(&self, row: usize, name: &str) -> FrameResult<Value> {
        let column = self.column(name)?;
        column.get(row).ok_or(FrameError::Index {
            axis: Axis::Row,
            position: row as i64,
            len: self.row_count,
        })
    }

    /// New store over `rows` × `cols`; both ranges must already be in bounds
    pub(crate) fn slice(&self, rows: Range<usize>, cols: Range<usize>) -> Self {
        let row_count = rows.len();
        let columns = self.columns[cols]
            .iter()
            .map(|c| c.slice(rows.clone()))
            .collect();
        Self::from_parts(columns, row_count)
    }

    /// First `n` rows, clamped to the row count
    pub fn head_rows(&self, n: usize) -> Self {
        self.slice(0..n.min(self.row_count), 0..self.columns.len())
    }

    /// Last `n` rows, clamped to the row count
    pub fn tail_rows(&self, n: usize) -> Self {
        let start = self.row_count - n.min(self.row_count);
        self.slice(start..self.row_count, 0..self.columns.len())
    }

    /// Row-major numeric export; every column must be numeric
    pub fn to_matrix(&self) -> FrameResult<Vec<Vec<f64>>> {
        if let Some(text) = self.columns.iter().find(|c| !c.dtype().is_numeric()) {
            let value = text.display_at(0).unwrap_or_default();
            return Err(FrameError::TypeCoercion {
                column: text.name().to_string(),
                value,
                target: ElementType::Float,
            });
        }
        let mut matrix = vec![Vec::with_capacity(self.columns.len()); self.row_count];
        for column in &self.columns {
            match column.data() {
                ColumnData::Integer(v) => {
                    for (row, n) in matrix.iter_mut().zip(v) {
                        row.push(*n as f64);
                    }
                }
                ColumnData::Float(v) => {
                    for (row, n) in matrix.iter_mut().zip(v) {
                        row.push(*n);
                    }
                }
                ColumnData::Text(_) => unreachable!("text columns rejected above"),
            }
        }
        Ok(matrix)
    }
}

fn collect_input<H, R, C>(header: H, rows: R) -> FrameResult<(Vec<String>, Vec<Vec<String>>)>
where
    H: IntoIterator,
    H::Item: Into<String>,
    R: IntoIterator<Item = C>,
    C: IntoIterator,
    C::Item: Into<String>,
{
    let header: Vec<String> = header.into_iter().map(Into::into).collect();
    let rows: Vec<Vec<String>> = rows
        .into_iter()
        .map(|row| row.into_iter().map(Into::into).collect())
        .collect();
    if header.is_empty() {
        return Err(FrameError::EmptyInput("header has no columns".into()));
    }
    if rows.is_empty() {
        return Err(FrameError::EmptyInput("no data rows".into()));
    }
    Ok((header, rows))
}

/// Drop a trailing blank header field past the data width and name blank
/// fields `Unnamed: {i}`.
fn normalize_header(mut header: Vec<String>, width: usize) -> Vec<String> {
    if header.len() == width + 1 && header.last().is_some_and(|h| h.trim().is_empty()) {
        header.pop();
    }
    header
        .into_iter()
        .enumerate()
        .map(|(i, name)| {
            if name.trim().is_empty() {
                format!("{UNNAMED_PREFIX}{i}")
            } else {
                name
            }
        })
        .collect()
}

fn ensure_unique<'a>(names: impl IntoIterator<Item = &'a str>) -> FrameResult<()> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(FrameError::Schema(format!(
                "duplicate column name '{name}'"
            )));
        }
    }
    Ok(())
}

fn assemble(
    header: Vec<String>,
    rows: Vec<Vec<String>>,
    dtypes: Option<&[ElementType]>,
) -> FrameResult<Store> {
    let header = normalize_header(header, rows[0].len());
    let width = header.len();
    if let Some((line, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
        return Err(FrameError::Format(format!(
            "row {line} has {} fields, header has {width}",
            row.len()
        )));
    }
    if let Some(dtypes) = dtypes {
        if dtypes.len() != width {
            return Err(FrameError::Format(format!(
                "{} types given for {width} columns",
                dtypes.len()
            )));
        }
    }
    ensure_unique(header.iter().map(String::as_str))?;

    let row_count = rows.len();
    let mut cells: Vec<Vec<String>> = (0..width).map(|_| Vec::with_capacity(row_count)).collect();
    for row in rows {
        for (column, cell) in cells.iter_mut().zip(row) {
            column.push(cell);
        }
    }

    let columns = header
        .into_iter()
        .zip(cells)
        .enumerate()
        .map(|(i, (name, cells))| {
            let dtype = match dtypes {
                Some(dtypes) => dtypes[i],
                None => infer_column_dtype(&cells),
            };
            Column::parse(name, cells, dtype)
        })
        .collect::<FrameResult<Vec<_>>>()?;

    let store = Store::from_parts(columns, row_count);
    tracing::debug!(
        rows = row_count,
        cols = width,
        "Built store with schema {:?}",
        store.schema()
    );
    Ok(store)
}
