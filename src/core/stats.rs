//! Summary statistics over numeric columns.

use crate::constants::STATS_PRECISION;
use crate::core::column::{Column, ColumnData};
use crate::core::store::Store;
use crate::data::FrameResult;

const STATS_LABEL: &str = "stats";
const STAT_NAMES: [&str; 5] = ["count", "mean", "std", "min", "max"];

fn round_to(value: f64, places: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

/// count, mean, sample std (ddof = 1), min, max over non-NaN values
fn summarize(values: &[f64]) -> [f64; 5] {
    let valid: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    let count = valid.len() as f64;
    if valid.is_empty() {
        return [0.0, f64::NAN, f64::NAN, f64::NAN, f64::NAN];
    }
    let mean = valid.iter().sum::<f64>() / count;
    let std = if valid.len() < 2 {
        f64::NAN
    } else {
        (valid.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (count - 1.0)).sqrt()
    };
    let min = valid.iter().copied().fold(f64::INFINITY, f64::min);
    let max = valid.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    [count, mean, std, min, max].map(|v| round_to(v, STATS_PRECISION))
}

/// Name for the statistic labels that no column of `store` already uses
fn label_name(store: &Store) -> String {
    let mut name = STATS_LABEL.to_string();
    let mut suffix = 1;
    while store.position(&name).is_some() {
        name = format!("{STATS_LABEL}_{suffix}");
        suffix += 1;
    }
    name
}

/// Describe every numeric column of `store`
///
/// The result has a leading `stats` text column naming each statistic and
/// one float column per numeric input column, in input order. When `stats`
/// is already a column name the label column becomes `stats_1` (or the
/// first free `stats_N`).
pub fn describe(store: &Store) -> FrameResult<Store> {
    let mut columns = vec![Column::new(
        label_name(store),
        ColumnData::Text(STAT_NAMES.iter().map(|s| s.to_string()).collect()),
    )];

    for column in store.columns() {
        let values: Vec<f64> = match column.data() {
            ColumnData::Integer(v) => v.iter().map(|n| *n as f64).collect(),
            ColumnData::Float(v) => v.clone(),
            ColumnData::Text(_) => continue,
        };
        columns.push(Column::new(
            column.name(),
            ColumnData::Float(summarize(&values).to_vec()),
        ));
    }

    tracing::trace!(numeric = columns.len() - 1, "Described store");
    Store::from_columns(columns)
}
