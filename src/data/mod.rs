//! Data loading and error handling module
//!
//! This module reads delimited text into raw rows, infers column types from
//! those rows, and defines the error type shared by the whole crate.
//!
//! ## Error Handling
//!
//! All fallible operations return `FrameResult<T>` which uses the
//! `FrameError` type. `FrameError::kind()` classifies an error as one of:
//! - `NotFound`: input path missing
//! - `EmptyInput`: no header or no rows
//! - `Format`: irregular row shape
//! - `Schema`: unknown or duplicate column names
//! - `TypeCoercion`: a value cannot take the requested type
//! - `Index`: positional access out of bounds

mod csv_parser;
mod error;
pub mod inference;

pub use csv_parser::*;
pub use error::*;
pub use inference::{infer_column_dtype, is_float, is_integer};
