//! CSV and TSV reading
//!
//! Reads delimited text into a header plus raw string rows. Typing happens
//! later, when a [`Store`](crate::core::Store) is built from the rows.

use crate::data::error::{FrameError, FrameResult};
use csv::{ReaderBuilder, Trim};
use std::io::Read;
use std::path::Path;

/// Header names plus raw rows, as read from delimited text
pub type RawTable = (Vec<String>, Vec<Vec<String>>);

/// Reader settings
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CsvOptions {
    /// Field delimiter (default: comma)
    pub delimiter: u8,
    /// Whether to trim whitespace around fields
    pub trim: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: true,
        }
    }
}

impl CsvOptions {
    /// Options for the given path: tab-delimited for `.tsv`, comma otherwise
    pub fn for_path(path: &Path) -> Self {
        let is_tsv = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("tsv"));
        Self {
            delimiter: if is_tsv { b'\t' } else { b',' },
            ..Self::default()
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }
}

/// Read a delimited file into a header and raw rows
///
/// # Errors
/// - [`FrameError::NotFound`] if `path` does not exist
/// - [`FrameError::EmptyInput`] if there is no header or no data row
/// - [`FrameError::Format`] if data rows disagree on their field count
pub fn read_csv(path: &Path, options: &CsvOptions) -> FrameResult<RawTable> {
    let start = std::time::Instant::now();
    let file = std::fs::File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => FrameError::NotFound {
            path: path.to_path_buf(),
        },
        _ => FrameError::Io(e),
    })?;

    let table = parse_reader(file, options)?;
    tracing::debug!(
        "Read CSV {} with {} rows x {} cols in {:?}",
        path.display(),
        table.1.len(),
        table.0.len(),
        start.elapsed()
    );
    Ok(table)
}

/// Parse delimited content from a string
pub fn parse_csv_content(content: &str, options: &CsvOptions) -> FrameResult<RawTable> {
    parse_reader(content.as_bytes(), options)
}

fn parse_reader<R: Read>(source: R, options: &CsvOptions) -> FrameResult<RawTable> {
    let mut reader = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .trim(if options.trim { Trim::All } else { Trim::None })
        .flexible(true) // widths are checked below, with better messages
        .from_reader(source);

    let header: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if header.is_empty() {
        return Err(FrameError::EmptyInput("file has no header row".into()));
    }

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: Vec<String> = record.iter().map(str::to_string).collect();
        if let Some(first) = rows.first() {
            if row.len() != first.len() {
                let line = record.position().map_or(rows.len() + 2, |p| p.line() as usize);
                return Err(FrameError::Format(format!(
                    "line {line} has {} fields, expected {}",
                    row.len(),
                    first.len()
                )));
            }
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(FrameError::EmptyInput("file has no data rows".into()));
    }
    Ok((header, rows))
}
