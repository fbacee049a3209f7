//! Unit tests for store construction and access.

use microframe::{Column, ColumnData, ElementType, ErrorKind, Store, Value};

#[test]
fn test_build_infers_per_column() {
    let store = Store::from_rows(
        ["id", "price", "name"],
        [["1", "9.99", "apple"], ["2", "5", "pear"]],
    )
    .unwrap();
    assert_eq!(
        store.schema(),
        vec![
            ("id".to_string(), ElementType::Integer),
            ("price".to_string(), ElementType::Float),
            ("name".to_string(), ElementType::Text),
        ]
    );
    assert_eq!(store.value(1, "price").unwrap(), Value::Float(5.0));
}

#[test]
fn test_build_errors_are_classified() {
    let no_rows: Vec<Vec<&str>> = Vec::new();
    assert_eq!(
        Store::from_rows(["a"], no_rows).unwrap_err().kind(),
        ErrorKind::EmptyInput
    );
    assert_eq!(
        Store::from_rows(["a", "a"], [["1", "2"]]).unwrap_err().kind(),
        ErrorKind::Schema
    );
    assert_eq!(
        Store::from_rows(["a", "b", "c"], [["1", "2"]]).unwrap_err().kind(),
        ErrorKind::Format
    );
}

#[test]
fn test_columns_have_equal_length() {
    let store = Store::from_rows(["a", "b"], [["1", "x"], ["2", "y"], ["3", "z"]]).unwrap();
    assert!(store.columns().iter().all(|c| c.len() == store.row_count()));
}

#[test]
fn test_row_record_by_name_and_position() {
    let store = Store::from_rows(["n", "s"], [["1", "x"], ["2", "y"]]).unwrap();
    let record = store.row(1).unwrap();
    assert_eq!(record.get("n"), Some(&Value::Integer(2)));
    assert_eq!(record.get_at(1), Some(&Value::from("y")));
    assert_eq!(record.names(), &["n".to_string(), "s".to_string()]);
}

#[test]
fn test_from_columns() {
    let store = Store::from_columns(vec![
        Column::new("x", ColumnData::Float(vec![0.5, 1.5])),
        Column::new("y", ColumnData::Text(vec!["a".into(), "b".into()])),
    ])
    .unwrap();
    assert_eq!(store.shape(), (2, 2));
    assert_eq!(store.value(0, "x").unwrap(), Value::Float(0.5));
}
