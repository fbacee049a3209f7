//! Unit tests for column type inference.

use microframe::{ElementType, infer_column_dtype, is_float};

#[test]
fn test_all_integer_cells_infer_integer() {
    assert_eq!(infer_column_dtype(&["10", "-2", "+7", "0"]), ElementType::Integer);
}

#[test]
fn test_single_float_cell_promotes_to_float() {
    assert_eq!(infer_column_dtype(&["10", "-2", "3.5", "0"]), ElementType::Float);
    assert_eq!(infer_column_dtype(&["1", "2e3"]), ElementType::Float);
}

#[test]
fn test_single_word_cell_falls_back_to_text() {
    assert_eq!(infer_column_dtype(&["10", "-2", "n/a", "0"]), ElementType::Text);
}

#[test]
fn test_is_float_literals() {
    assert!(is_float("3.14e-2"));
    assert!(is_float("  42 "));
    assert!(!is_float("abc"));
    assert!(!is_float(""));
    assert!(!is_float("1,000"));
}

#[test]
fn test_zero_rows_is_text() {
    let cells: Vec<String> = Vec::new();
    assert_eq!(infer_column_dtype(&cells), ElementType::Text);
}
