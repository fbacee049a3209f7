//! Unit tests for rename and change_dtypes.

use crate::helpers::sample_frame;
use microframe::core::manipulator::{change_dtypes, rename};
use microframe::{ElementType, ErrorKind, Store, Value};

fn store() -> Store {
    Store::from_rows(["a", "s"], [["1", "x"], ["2", "y"], ["3", "z"]]).unwrap()
}

#[test]
fn test_rename_round_trip() {
    let original = store();
    let there = rename(&original, [("a", "b")]).unwrap();
    let back = rename(&there, [("b", "a")]).unwrap();
    assert_eq!(back, original);
}

#[test]
fn test_change_dtypes_same_type_is_identity() {
    let original = store();
    let same = change_dtypes(
        &original,
        [("a", ElementType::Integer), ("s", ElementType::Text)],
    )
    .unwrap();
    assert_eq!(same, original);
}

#[test]
fn test_rename_missing_is_schema_error() {
    let frame = sample_frame();
    let err = frame.rename([("missing", "x")]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Schema);
}

#[test]
fn test_text_to_integer_is_coercion_error() {
    let frame = sample_frame();
    let err = frame.change_dtypes([("s", ElementType::Integer)]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeCoercion);
    assert_eq!(frame.types()[1].1, ElementType::Text);
}

#[test]
fn test_integer_to_float_and_back() {
    let original = store();
    let floats = change_dtypes(&original, [("a", ElementType::Float)]).unwrap();
    let ints = change_dtypes(&floats, [("a", ElementType::Integer)]).unwrap();
    assert_eq!(ints, original);
}

#[test]
fn test_type_names_parse_for_change_dtypes() {
    let frame = sample_frame();
    let target: ElementType = "float64".parse().unwrap();
    frame.change_dtypes([("n", target)]).unwrap();
    assert_eq!(frame.types()[0].1, ElementType::Float);
}

#[test]
fn test_float_with_gaps_through_text_and_back() {
    let gappy = Store::from_rows(["v"], [["1.5"], [""], ["1e400"]]).unwrap();
    let text = change_dtypes(&gappy, [("v", ElementType::Text)]).unwrap();
    assert_eq!(text.value(1, "v").unwrap(), Value::from("NaN"));
    assert_eq!(text.value(2, "v").unwrap(), Value::from("inf"));

    let back = change_dtypes(&text, [("v", ElementType::Float)]).unwrap();
    assert_eq!(back.value(0, "v").unwrap(), Value::Float(1.5));
    assert!(back.value(1, "v").unwrap().as_f64().is_some_and(f64::is_nan));
    assert_eq!(back.value(2, "v").unwrap(), Value::Float(f64::INFINITY));
}
