//! Schema-changing transformations.
//!
//! Both operations validate the whole change set against the current schema
//! before building anything, and return a fresh store. The input store is
//! never touched.

use crate::core::column::Column;
use crate::core::store::Store;
use crate::data::{FrameError, FrameResult};
use crate::types::ElementType;
use std::collections::{HashMap, HashSet};

/// Rename columns by `old -> new` pairs
///
/// Data and element types are shared with the input store; only the column
/// identifiers change.
///
/// # Errors
/// [`FrameError::Schema`] if an old name is absent or named twice, a new
/// name is blank, or the result would contain duplicate names.
pub fn rename<I, K, V>(store: &Store, mapping: I) -> FrameResult<Store>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    let mut renames: HashMap<String, String> = HashMap::new();
    for (old, new) in mapping {
        let old = old.as_ref();
        let new: String = new.into();
        if store.position(old).is_none() {
            return Err(FrameError::Schema(format!(
                "column '{old}' does not exist and cannot be renamed"
            )));
        }
        if new.trim().is_empty() {
            return Err(FrameError::Schema(format!(
                "column '{old}' cannot be renamed to a blank name"
            )));
        }
        if renames.insert(old.to_string(), new).is_some() {
            return Err(FrameError::Schema(format!(
                "column '{old}' is renamed more than once"
            )));
        }
    }

    let names: Vec<&str> = store
        .columns()
        .iter()
        .map(|c| renames.get(c.name()).map_or(c.name(), String::as_str))
        .collect();
    let mut seen = HashSet::new();
    if let Some(dup) = names.iter().find(|name| !seen.insert(**name)) {
        return Err(FrameError::Schema(format!(
            "column '{dup}' already exists; duplicate names are not allowed"
        )));
    }

    let columns: Vec<Column> = store
        .columns()
        .iter()
        .zip(&names)
        .map(|(column, name)| column.renamed(*name))
        .collect();

    tracing::debug!(?renames, "Renamed columns");
    Ok(Store::from_parts(columns, store.row_count()))
}

/// Convert the named columns to new element types
///
/// Untouched columns share their buffers with the input store. Requesting a
/// column's current type leaves it unchanged.
///
/// # Errors
/// - [`FrameError::Schema`] if a named column does not exist
/// - [`FrameError::TypeCoercion`] if any cell has no well-defined conversion
pub fn change_dtypes<I, K>(store: &Store, mapping: I) -> FrameResult<Store>
where
    I: IntoIterator<Item = (K, ElementType)>,
    K: AsRef<str>,
{
    let mut targets: HashMap<usize, ElementType> = HashMap::new();
    for (name, dtype) in mapping {
        let name = name.as_ref();
        let Some(index) = store.position(name) else {
            return Err(FrameError::Schema(format!(
                "column '{name}' does not exist and cannot have its type changed"
            )));
        };
        targets.insert(index, dtype);
    }

    let columns = store
        .columns()
        .iter()
        .enumerate()
        .map(|(i, column)| match targets.get(&i) {
            Some(dtype) => column.cast(*dtype),
            None => Ok(column.clone()),
        })
        .collect::<FrameResult<Vec<_>>>()?;

    tracing::debug!(changed = targets.len(), "Changed column types");
    Ok(Store::from_parts(columns, store.row_count()))
}
