//! Unit tests for positional selection.

use crate::helpers::{numbered_store, sample_frame};
use microframe::core::indexer::select;
use microframe::{ElementType, ErrorKind, Selection, Selector, Value};

#[test]
fn test_iloc_first_cell_is_integer_one() {
    let frame = sample_frame();
    assert_eq!(frame.types()[0].1, ElementType::Integer);
    assert_eq!(frame.types()[1].1, ElementType::Text);
    match frame.iloc(0, 0).unwrap() {
        Selection::Scalar(Value::Integer(n)) => assert_eq!(n, 1),
        other => panic!("Expected integer scalar, got {other:?}"),
    }
}

#[test]
fn test_row_and_column_selectors_are_independent() {
    let store = numbered_store(6);
    let block = select(&store, &Selector::from(2..5), &Selector::from(1..2))
        .unwrap()
        .into_table()
        .unwrap();
    assert_eq!(block.shape(), (3, 1));
    assert_eq!(block.column_names(), vec!["label"]);
    assert_eq!(block.value(0, "label").unwrap(), Value::from("row-2"));
}

#[test]
fn test_full_selection_equals_store() {
    let store = numbered_store(4);
    let all = select(&store, &Selector::All, &Selector::All)
        .unwrap()
        .into_table()
        .unwrap();
    assert_eq!(all, store);
}

#[test]
fn test_inclusive_and_open_ranges() {
    let store = numbered_store(5);
    let upper = select(&store, &Selector::from(3..), &Selector::All)
        .unwrap()
        .into_table()
        .unwrap();
    assert_eq!(upper.row_count(), 2);

    let inclusive = select(&store, &Selector::from(0..=1), &Selector::All)
        .unwrap()
        .into_table()
        .unwrap();
    assert_eq!(inclusive.row_count(), 2);
}

#[test]
fn test_out_of_bounds_is_index_error() {
    let frame = sample_frame();
    assert_eq!(frame.iloc(5, 0).unwrap_err().kind(), ErrorKind::Index);
    assert_eq!(frame.iloc(0, 2).unwrap_err().kind(), ErrorKind::Index);
    assert_eq!(frame.iloc(-4, 0).unwrap_err().kind(), ErrorKind::Index);
    assert_eq!(frame.iloc(0..4, ..).unwrap_err().kind(), ErrorKind::Index);
}

#[test]
fn test_open_and_closed_ranges_fail_alike() {
    let frame = sample_frame();
    assert_eq!(frame.iloc(5.., ..).unwrap_err().kind(), ErrorKind::Index);
    assert_eq!(frame.iloc(5..6, ..).unwrap_err().kind(), ErrorKind::Index);
    assert_eq!(frame.iloc(.., 4..).unwrap_err().kind(), ErrorKind::Index);
    assert_eq!(frame.iloc(2..1, ..).unwrap_err().kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_view_outlives_frame_changes() {
    let frame = sample_frame();
    let view = frame.iloc(.., ..).unwrap().into_table().unwrap();
    frame.rename([("n", "m")]).unwrap();
    assert_eq!(view.column_names(), vec!["n", "s"]);
    assert_eq!(frame.column_names(), vec!["m", "s"]);
}
