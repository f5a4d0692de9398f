use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {source}")]
    Csv {
        #[source]
        source: csv::Error,
    },

    #[error("data row on line {line} invalid: {message}")]
    DataRow { line: u64, message: String },

    #[error("no columns to parse from file")]
    EmptyData,

    #[error("failed to build table: {source}")]
    Frame {
        #[source]
        source: polars::error::PolarsError,
    },
}

impl From<csv::Error> for ParserError {
    fn from(source: csv::Error) -> Self {
        ParserError::Csv { source }
    }
}
