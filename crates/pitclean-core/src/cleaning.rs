// crates/pitclean-core/src/cleaning.rs

use polars::prelude::*;
use tracing::debug;

use crate::error::Result;
use crate::schema::ExpectedSchema;

/// Result of cleaning one table.
#[derive(Debug)]
pub enum CleanOutcome {
    /// Empty rows removed and columns renamed to the expected names.
    Cleaned(DataFrame),
    /// Column count did not match; carries the labels that were found.
    ColumnMismatch { observed: Vec<String> },
}

/// Drops fully-empty rows, checks the column count, and renames columns
/// positionally to the expected schema.
pub fn clean(df: DataFrame, expected: &ExpectedSchema) -> Result<CleanOutcome> {
    let before = df.height();
    let mut cleaned = drop_empty_rows(&df)?;
    debug!(
        rows_before = before,
        rows_after = cleaned.height(),
        "dropped fully-empty rows"
    );

    if !expected.matches_width(cleaned.width()) {
        return Ok(CleanOutcome::ColumnMismatch {
            observed: column_labels(&cleaned),
        });
    }

    cleaned.set_column_names(expected.columns().iter().map(String::as_str))?;
    Ok(CleanOutcome::Cleaned(cleaned))
}

/// Keeps every row with at least one non-null cell, preserving order.
pub fn drop_empty_rows(df: &DataFrame) -> Result<DataFrame> {
    let mut keep = BooleanChunked::full("keep".into(), false, df.height());
    for column in df.get_columns() {
        keep = &keep | &column.is_not_null();
    }
    Ok(df.filter(&keep)?)
}

pub fn column_labels(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect()
}
