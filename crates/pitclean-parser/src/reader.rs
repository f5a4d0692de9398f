use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use csv::StringRecord;
use once_cell::sync::Lazy;
use polars::prelude::DataFrame;
use tracing::debug;

use crate::errors::ParserError;
use crate::model::RawTable;

/// Cell texts read as missing values.
pub const NA_VALUES: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

static NA_LOOKUP: Lazy<HashSet<&'static str>> = Lazy::new(|| NA_VALUES.into_iter().collect());

const BOM: char = '\u{feff}';

pub fn is_missing(cell: &str) -> bool {
    NA_LOOKUP.contains(cell)
}

/// Reads a CSV file from disk into a dataframe of nullable string columns.
pub fn load(path: &Path) -> Result<DataFrame, ParserError> {
    let content = fs::read(path).map_err(|source| ParserError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let table = read_raw_table(&content)?;
    debug!(
        path = %path.display(),
        columns = table.width(),
        rows = table.height(),
        "loaded csv"
    );
    table.into_dataframe()
}

/// Parses CSV bytes into a dataframe; the first record is the header.
pub fn parse_table(content: &[u8]) -> Result<DataFrame, ParserError> {
    read_raw_table(content)?.into_dataframe()
}

pub fn read_raw_table(content: &[u8]) -> Result<RawTable, ParserError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content);

    let header = reader.headers()?.clone();
    if header.is_empty() {
        return Err(ParserError::EmptyData);
    }
    let headers = normalize_headers(&header);
    let width = headers.len();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.len() > width {
            let line = record.position().map(|pos| pos.line()).unwrap_or_default();
            return Err(ParserError::DataRow {
                line,
                message: format!("expected {width} fields, saw {}", record.len()),
            });
        }

        let mut row: Vec<Option<String>> = record
            .iter()
            .map(|cell| (!is_missing(cell)).then(|| cell.to_string()))
            .collect();
        row.resize(width, None);
        rows.push(row);
    }

    Ok(RawTable { headers, rows })
}

/// Names blank labels `Unnamed: {index}` and suffixes repeats with `.1`, `.2`, ...
fn normalize_headers(header: &StringRecord) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut taken: HashSet<String> = HashSet::new();
    let mut labels = Vec::with_capacity(header.len());

    for (idx, raw) in header.iter().enumerate() {
        let raw = if idx == 0 {
            raw.trim_start_matches(BOM)
        } else {
            raw
        };
        let base = if raw.is_empty() {
            format!("Unnamed: {idx}")
        } else {
            raw.to_string()
        };

        let mut label = base.clone();
        while taken.contains(&label) {
            let count = seen.entry(base.clone()).or_insert(0);
            *count += 1;
            label = format!("{base}.{count}");
        }
        taken.insert(label.clone());
        labels.push(label);
    }

    labels
}
