//! Typed column storage.
//!
//! A [`Column`] is a name plus one homogeneous buffer tagged with its element
//! type. Buffers sit behind an `Arc` so renames and re-slices of a store can
//! share them.

use crate::data::inference::{is_float, is_integer, parse_non_finite};
use crate::data::{FrameError, FrameResult};
use crate::types::{format_float, ElementType, Value};
use std::ops::Range;
use std::sync::Arc;

/// Homogeneous backing buffer of a column
#[derive(Clone, Debug, PartialEq)]
pub enum ColumnData {
    Integer(Vec<i64>),
    Float(Vec<f64>),
    Text(Vec<String>),
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Integer(v) => v.len(),
            ColumnData::Float(v) => v.len(),
            ColumnData::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn dtype(&self) -> ElementType {
        match self {
            ColumnData::Integer(_) => ElementType::Integer,
            ColumnData::Float(_) => ElementType::Float,
            ColumnData::Text(_) => ElementType::Text,
        }
    }
}

/// A named, typed, fixed-length sequence of values
#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    name: String,
    data: Arc<ColumnData>,
}

impl Column {
    pub fn new(name: impl Into<String>, data: ColumnData) -> Self {
        Self {
            name: name.into(),
            data: Arc::new(data),
        }
    }

    /// Build a column of the given type from raw text cells
    pub fn parse(name: impl Into<String>, cells: Vec<String>, dtype: ElementType) -> FrameResult<Self> {
        Column::new(name, ColumnData::Text(cells)).cast(dtype)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &ColumnData {
        &self.data
    }

    pub fn dtype(&self) -> ElementType {
        self.data.dtype()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, row: usize) -> Option<Value> {
        match self.data.as_ref() {
            ColumnData::Integer(v) => v.get(row).copied().map(Value::Integer),
            ColumnData::Float(v) => v.get(row).copied().map(Value::Float),
            ColumnData::Text(v) => v.get(row).cloned().map(Value::Text),
        }
    }

    /// Textual form of one cell, as the printer shows it
    pub fn display_at(&self, row: usize) -> Option<String> {
        match self.data.as_ref() {
            ColumnData::Integer(v) => v.get(row).map(|n| n.to_string()),
            ColumnData::Float(v) => v.get(row).map(|n| format_float(*n)),
            ColumnData::Text(v) => v.get(row).cloned(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Value> + '_ {
        (0..self.len()).filter_map(move |row| self.get(row))
    }

    /// Same buffer under another name
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: Arc::clone(&self.data),
        }
    }

    /// Copy of the rows in `range`; the full range shares the buffer
    pub fn slice(&self, range: Range<usize>) -> Self {
        if range.start == 0 && range.end == self.len() {
            return self.clone();
        }
        let data = match self.data.as_ref() {
            ColumnData::Integer(v) => ColumnData::Integer(v[range].to_vec()),
            ColumnData::Float(v) => ColumnData::Float(v[range].to_vec()),
            ColumnData::Text(v) => ColumnData::Text(v[range].to_vec()),
        };
        Column::new(self.name.clone(), data)
    }

    /// Convert every cell to `target`, failing on the first cell that has no
    /// well-defined conversion. Casting to the current type shares the buffer.
    pub fn cast(&self, target: ElementType) -> FrameResult<Self> {
        if self.dtype() == target {
            return Ok(self.clone());
        }
        let coercion_error = |value: String| FrameError::TypeCoercion {
            column: self.name.clone(),
            value,
            target,
        };

        let data = match (self.data.as_ref(), target) {
            (ColumnData::Integer(v), ElementType::Float) => {
                ColumnData::Float(v.iter().map(|n| *n as f64).collect())
            }
            (ColumnData::Float(v), ElementType::Integer) => ColumnData::Integer(
                v.iter()
                    .map(|n| float_to_int(*n).ok_or_else(|| coercion_error(format_float(*n))))
                    .collect::<FrameResult<_>>()?,
            ),
            (ColumnData::Text(v), ElementType::Integer) => ColumnData::Integer(
                v.iter()
                    .map(|s| {
                        let cell = s.trim();
                        if is_integer(cell) {
                            cell.parse::<i64>().map_err(|_| coercion_error(s.clone()))
                        } else {
                            Err(coercion_error(s.clone()))
                        }
                    })
                    .collect::<FrameResult<_>>()?,
            ),
            (ColumnData::Text(v), ElementType::Float) => ColumnData::Float(
                v.iter()
                    .map(|s| {
                        let cell = s.trim();
                        if cell.is_empty() {
                            Ok(f64::NAN)
                        } else if is_float(cell) {
                            cell.parse::<f64>().map_err(|_| coercion_error(s.clone()))
                        } else {
                            parse_non_finite(cell).ok_or_else(|| coercion_error(s.clone()))
                        }
                    })
                    .collect::<FrameResult<_>>()?,
            ),
            (_, ElementType::Text) => {
                ColumnData::Text((0..self.len()).filter_map(|row| self.display_at(row)).collect())
            }
            // Same-type pairs returned above.
            (data, _) => data.clone(),
        };
        Ok(Column {
            name: self.name.clone(),
            data: Arc::new(data),
        })
    }
}

/// Lossless float to integer conversion
fn float_to_int(n: f64) -> Option<i64> {
    // 2^63 is exactly representable; anything at or past it overflows.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    if n.is_finite() && n.fract() == 0.0 && n >= -LIMIT && n < LIMIT {
        Some(n as i64)
    } else {
        None
    }
}
