use std::fs;
use std::path::PathBuf;

use polars::prelude::DataFrame;

use crate::errors::ParserError;
use crate::{is_missing, load, parse_table, read_raw_table};

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

fn fixture(name: &str) -> Vec<u8> {
    let full_path = fixture_path(name);
    fs::read(&full_path)
        .unwrap_or_else(|err| panic!("failed to read fixture {}: {}", full_path.display(), err))
}

fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect()
}

fn cell<'a>(df: &'a DataFrame, column: &str, row: usize) -> Option<&'a str> {
    df.column(column)
        .expect("column missing")
        .str()
        .expect("column is not a string column")
        .get(row)
}

#[test]
fn loads_five_column_count_table() {
    let df = load(&fixture_path("tabula-2020.csv")).expect("load failed");

    assert_eq!(
        column_names(&df),
        [
            "Household Type",
            "Emergency Shelter",
            "Transitional Housing",
            "Unsheltered",
            "Total"
        ]
    );
    assert_eq!(df.height(), 6);
    assert_eq!(cell(&df, "Household Type", 0), Some("Total Number of Households"));
    assert_eq!(cell(&df, "Emergency Shelter", 0), Some("812"));
    assert_eq!(cell(&df, "Total", 5), Some("11"));
}

#[test]
fn blank_cells_and_na_tokens_become_null() {
    let df = parse_table(&fixture("tabula-2020.csv")).expect("parse failed");

    for column in column_names(&df) {
        assert_eq!(cell(&df, &column, 1), None, "row 1 of {column} should be null");
    }
    assert_eq!(cell(&df, "Unsheltered", 5), None);
    assert_eq!(cell(&df, "Unsheltered", 2), Some("0"));
}

#[test]
fn cell_text_is_kept_verbatim() {
    let df = parse_table(b"a,b\n 007 ,\"1,234\"\n").expect("parse failed");

    assert_eq!(cell(&df, "a", 0), Some(" 007 "));
    assert_eq!(cell(&df, "b", 0), Some("1,234"));
}

#[test]
fn normalizes_blank_and_duplicate_headers() {
    let table = read_raw_table(&fixture("tabula-2018.csv")).expect("parse failed");

    assert_eq!(
        table.headers,
        [
            "Household Type",
            "Unnamed: 1",
            "Transitional Housing",
            "Total",
            "Total.1"
        ]
    );
}

#[test]
fn short_rows_are_padded_with_missing_cells() {
    let table = read_raw_table(&fixture("tabula-2018.csv")).expect("parse failed");

    assert_eq!(table.height(), 2);
    assert_eq!(
        table.rows[1],
        vec![
            Some("Veterans".to_string()),
            Some("3".to_string()),
            None,
            None,
            None
        ]
    );
}

#[test]
fn header_only_file_yields_empty_table() {
    let df = parse_table(b"x,y,z\n").expect("parse failed");

    assert_eq!(df.width(), 3);
    assert_eq!(df.height(), 0);
}

#[test]
fn rejects_rows_wider_than_header() {
    let err = parse_table(&fixture("tabula-2017.csv")).expect_err("wide row should fail");

    match err {
        ParserError::DataRow { line, message } => {
            assert_eq!(line, 2);
            assert!(message.contains("expected 5 fields, saw 6"), "{message}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn rejects_empty_input() {
    let err = parse_table(b"").expect_err("empty input should fail");
    assert!(matches!(err, ParserError::EmptyData));
    assert_eq!(err.to_string(), "no columns to parse from file");
}

#[test]
fn rejects_invalid_utf8() {
    let err = parse_table(b"name,count\n\xff\xfe,1\n").expect_err("invalid utf-8 should fail");
    assert!(matches!(err, ParserError::Csv { .. }), "{err:?}");
}

#[test]
fn missing_file_reports_path() {
    let path = fixture_path("does-not-exist.csv");
    let err = load(&path).expect_err("missing file should fail");

    match &err {
        ParserError::Io { path: reported, .. } => assert_eq!(reported, &path),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains("does-not-exist.csv"));
}

#[test]
fn recognizes_na_tokens() {
    for token in ["", "NA", "N/A", "null", "NaN", "#N/A", "<NA>"] {
        assert!(is_missing(token), "{token:?} should be missing");
    }
    for token in ["0", " ", "na ", "none", "-"] {
        assert!(!is_missing(token), "{token:?} should not be missing");
    }
}
