//! Columnar storage, positional selection, schema transforms and rendering.
pub mod column;
pub mod indexer;
pub mod manipulator;
pub mod printer;
pub mod stats;
pub mod store;

pub use column::{Column, ColumnData};
pub use indexer::{Selection, Selector};
pub use printer::PrintOptions;
pub use store::Store;
