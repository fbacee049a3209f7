//! The `Frame` facade.
//!
//! A frame owns one active [`Store`] and forwards shape queries, indexing,
//! schema transforms and rendering to the core modules.
//!
//! ## Ownership
//!
//! `rename` and `change_dtypes` take `&self`: the new store is built from the
//! current one under an upgradable read lock, then swapped in under the write
//! lock. Replacers are serialized, readers never observe a half-built store,
//! and a [`Frame::snapshot`] taken earlier keeps pointing at the old store.

use crate::constants::DEFAULT_HEAD_ROWS;
use crate::core::{indexer, manipulator, printer, stats};
use crate::core::{Column, PrintOptions, Selection, Selector, Store};
use crate::data::{read_csv, CsvOptions, FrameError, FrameResult};
use crate::types::ElementType;
use parking_lot::{RwLock, RwLockUpgradableReadGuard};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Load a delimited file into a frame, inferring column types
///
/// `.tsv` files are read tab-delimited, everything else comma-delimited.
pub fn build_frame(path: impl AsRef<Path>) -> FrameResult<Frame> {
    let path = path.as_ref();
    build_frame_with(path, &CsvOptions::for_path(path))
}

/// Load a delimited file into a frame with explicit reader options
pub fn build_frame_with(path: impl AsRef<Path>, options: &CsvOptions) -> FrameResult<Frame> {
    let (header, rows) = read_csv(path.as_ref(), options)?;
    Frame::from_rows(header, rows)
}

/// Tabular data with derived shape and type information
pub struct Frame {
    store: RwLock<Arc<Store>>,
    print_options: PrintOptions,
}

impl Frame {
    pub fn new(store: Store) -> Self {
        Self {
            store: RwLock::new(Arc::new(store)),
            print_options: PrintOptions::default(),
        }
    }

    /// Build a frame from raw text rows, inferring column types
    pub fn from_rows<H, R, C>(header: H, rows: R) -> FrameResult<Self>
    where
        H: IntoIterator,
        H::Item: Into<String>,
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Store::from_rows(header, rows).map(Frame::new)
    }

    pub fn with_print_options(mut self, options: PrintOptions) -> Self {
        self.print_options = options;
        self
    }

    pub fn print_options(&self) -> &PrintOptions {
        &self.print_options
    }

    /// Handle to the current store; stays valid across later replacements
    pub fn snapshot(&self) -> Arc<Store> {
        Arc::clone(&self.store.read())
    }

    /// Number of rows
    pub fn count(&self) -> usize {
        self.store.read().row_count()
    }

    /// (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        self.store.read().shape()
    }

    /// Ordered column name to element type pairs
    pub fn types(&self) -> Vec<(String, ElementType)> {
        self.store.read().schema()
    }

    pub fn column_names(&self) -> Vec<String> {
        self.store
            .read()
            .column_names()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Column by label
    pub fn column(&self, name: &str) -> FrameResult<Column> {
        self.store.read().column(name).cloned()
    }

    /// Render the first `n` rows
    ///
    /// # Errors
    /// [`FrameError::InvalidArgument`] if `n` is zero. Counts past the row
    /// count are clamped.
    pub fn head(&self, n: usize) -> FrameResult<String> {
        ensure_positive(n)?;
        Ok(printer::render_head(&self.snapshot(), n, &self.print_options))
    }

    /// Render the last `n` rows
    ///
    /// # Errors
    /// [`FrameError::InvalidArgument`] if `n` is zero.
    pub fn tail(&self, n: usize) -> FrameResult<String> {
        ensure_positive(n)?;
        Ok(printer::render_tail(&self.snapshot(), n, &self.print_options))
    }

    /// Bounded view of the whole frame under its print options
    pub fn render(&self) -> String {
        printer::render(&self.snapshot(), &self.print_options)
    }

    /// Positional selection
    ///
    /// ```ignore
    /// let first = frame.iloc(0, 0)?;        // scalar
    /// let row = frame.iloc(-1, ..)?;        // last row as a record
    /// let block = frame.iloc(1..3, ..2)?;   // sub-store
    /// ```
    pub fn iloc(&self, rows: impl Into<Selector>, cols: impl Into<Selector>) -> FrameResult<Selection> {
        indexer::select(&self.snapshot(), &rows.into(), &cols.into())
    }

    /// Positional selection materialized as a new frame
    pub fn iloc_frame(&self, rows: impl Into<Selector>, cols: impl Into<Selector>) -> FrameResult<Frame> {
        let store = indexer::select_store(&self.snapshot(), &rows.into(), &cols.into())?;
        Ok(Frame::new(store).with_print_options(self.print_options))
    }

    /// Rename columns by `old -> new` pairs
    pub fn rename<I, K, V>(&self, mapping: I) -> FrameResult<&Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        self.replace_with(|store| manipulator::rename(store, mapping))
    }

    /// Change the element type of the named columns
    pub fn change_dtypes<I, K>(&self, mapping: I) -> FrameResult<&Self>
    where
        I: IntoIterator<Item = (K, ElementType)>,
        K: AsRef<str>,
    {
        self.replace_with(|store| manipulator::change_dtypes(store, mapping))
    }

    /// Summary statistics of the numeric columns
    pub fn describe(&self) -> FrameResult<Frame> {
        let summary = stats::describe(&self.snapshot())?;
        Ok(Frame::new(summary).with_print_options(self.print_options))
    }

    /// Row-major numeric export
    pub fn to_matrix(&self) -> FrameResult<Vec<Vec<f64>>> {
        self.snapshot().to_matrix()
    }

    fn replace_with(&self, build: impl FnOnce(&Store) -> FrameResult<Store>) -> FrameResult<&Self> {
        let current = self.store.upgradable_read();
        let next = build(&current)?;
        let mut active = RwLockUpgradableReadGuard::upgrade(current);
        tracing::trace!(shape = ?next.shape(), "Replacing frame store");
        *active = Arc::new(next);
        Ok(self)
    }
}

fn ensure_positive(n: usize) -> FrameResult<()> {
    if n == 0 {
        return Err(FrameError::InvalidArgument(
            "row count must be positive".into(),
        ));
    }
    Ok(())
}

impl From<Store> for Frame {
    fn from(store: Store) -> Self {
        Frame::new(store)
    }
}

impl Clone for Frame {
    fn clone(&self) -> Self {
        Self {
            store: RwLock::new(self.snapshot()),
            print_options: self.print_options,
        }
    }
}

impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frame")
            .field("shape", &self.shape())
            .field("types", &self.types())
            .finish()
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = printer::render_head(&self.snapshot(), DEFAULT_HEAD_ROWS, &self.print_options);
        f.write_str(&text)
    }
}
