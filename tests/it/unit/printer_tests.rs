//! Unit tests for text rendering.

use crate::helpers::{body_lines, numbered_frame, numbered_store};
use microframe::core::printer::render;
use microframe::{ErrorKind, PrintOptions};

#[test]
fn test_head_returns_first_rows_in_order() {
    let frame = numbered_frame(5);
    let text = frame.head(2).unwrap();
    let body = body_lines(&text);
    assert_eq!(body.len(), 3);
    assert!(body[0].starts_with("0 "));
    assert!(body[1].starts_with("1 "));
    assert_eq!(body[2], "...");
    assert!(text.ends_with("5 rows x 2 columns\n"));
}

#[test]
fn test_tail_returns_last_rows_in_order() {
    let frame = numbered_frame(5);
    let text = frame.tail(2).unwrap();
    let body = body_lines(&text);
    assert_eq!(body, vec!["...", "3   row-3", "4   row-4"]);
}

#[test]
fn test_head_clamps_to_row_count() {
    let frame = numbered_frame(3);
    let body_len = body_lines(&frame.head(50).unwrap()).len();
    assert_eq!(body_len, 3);
}

#[test]
fn test_head_zero_is_invalid() {
    assert_eq!(
        numbered_frame(3).head(0).unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );
}

#[test]
fn test_odd_max_rows_favors_top() {
    let opts = PrintOptions {
        max_rows: 5,
        ..PrintOptions::default()
    };
    let text = render(&numbered_store(20), &opts);
    let body = body_lines(&text);
    assert_eq!(body.len(), 6);
    assert!(body[2].starts_with("2 "));
    assert_eq!(body[3], "...");
    assert!(body[4].starts_with("18"));
    assert!(body[5].starts_with("19"));
}

#[test]
fn test_display_matches_head_five() {
    let frame = numbered_frame(8);
    assert_eq!(frame.to_string(), frame.head(5).unwrap());
}
