//! In-memory typed tabular frames.
//!
//! Delimited text is read into raw rows, each column's element type is
//! inferred (integer, float or text), and the rows are stored column-wise in
//! an immutable [`Store`]. A [`Frame`] wraps the active store and offers
//! positional selection, renaming, retyping and bounded text rendering.
//!
//! ```ignore
//! let frame = microframe::build_frame("people.csv")?;
//! frame.rename([("nm", "name")])?;
//! frame.change_dtypes([("age", ElementType::Float)])?;
//! println!("{}", frame.head(5)?);
//! ```

pub mod constants;
pub mod core;
pub mod data;
pub mod frame;
pub mod types;

pub use crate::core::{Column, ColumnData, PrintOptions, Selection, Selector, Store};
pub use crate::data::{CsvOptions, ErrorKind, FrameError, FrameResult, infer_column_dtype, is_float};
pub use crate::frame::{Frame, build_frame, build_frame_with};
pub use crate::types::{ElementType, Record, Value};
