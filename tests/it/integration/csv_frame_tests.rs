//! CSV file to frame integration tests

use crate::helpers::{init_tracing, write_csv};
use microframe::{CsvOptions, ElementType, ErrorKind, Selection, Value, build_frame, build_frame_with};

#[test]
fn test_build_frame_from_file() {
    init_tracing();
    let (_dir, path) = write_csv(
        "people.csv",
        "id,name,height\n1,Alice,1.62\n2,Bob,1.80\n3,\"Smith, Jane\",1.75\n",
    );

    let frame = build_frame(&path).unwrap();
    assert_eq!(frame.shape(), (3, 3));
    assert_eq!(frame.count(), 3);
    assert_eq!(
        frame.types(),
        vec![
            ("id".to_string(), ElementType::Integer),
            ("name".to_string(), ElementType::Text),
            ("height".to_string(), ElementType::Float),
        ]
    );
    assert_eq!(
        frame.iloc(2, 1).unwrap(),
        Selection::Scalar(Value::from("Smith, Jane"))
    );
}

#[test]
fn test_missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let err = build_frame(dir.path().join("absent.csv")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_empty_file_is_empty_input() {
    let (_dir, path) = write_csv("empty.csv", "");
    assert_eq!(build_frame(&path).unwrap_err().kind(), ErrorKind::EmptyInput);

    let (_dir, path) = write_csv("header_only.csv", "a,b\n");
    assert_eq!(build_frame(&path).unwrap_err().kind(), ErrorKind::EmptyInput);
}

#[test]
fn test_ragged_file_is_format_error() {
    let (_dir, path) = write_csv("ragged.csv", "a,b\n1,2\n3,4,5\n");
    assert_eq!(build_frame(&path).unwrap_err().kind(), ErrorKind::Format);
}

#[test]
fn test_trailing_delimiter_in_header() {
    let (_dir, path) = write_csv("trailing.csv", "a,b,\n1,2\n3,4\n");
    let frame = build_frame(&path).unwrap();
    assert_eq!(frame.column_names(), vec!["a", "b"]);
}

#[test]
fn test_tsv_and_custom_delimiter() {
    let (_dir, path) = write_csv("data.tsv", "a\tb\n1\tx\n");
    let frame = build_frame(&path).unwrap();
    assert_eq!(frame.shape(), (1, 2));

    let (_dir, path) = write_csv("semi.txt", "a;b\n1;x\n");
    let opts = CsvOptions::default().with_delimiter(b';');
    let frame = build_frame_with(&path, &opts).unwrap();
    assert_eq!(frame.column_names(), vec!["a", "b"]);
}
