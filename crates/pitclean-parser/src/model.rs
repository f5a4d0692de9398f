use polars::prelude::*;

use crate::errors::ParserError;

/// A CSV file as read from disk, before it becomes a dataframe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    /// Header labels after blank/duplicate normalization.
    pub headers: Vec<String>,
    /// Data rows, each padded to `headers.len()`. `None` marks a missing cell.
    pub rows: Vec<Vec<Option<String>>>,
}

impl RawTable {
    pub fn width(&self) -> usize {
        self.headers.len()
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Builds a dataframe with one nullable string column per header, in file order.
    pub fn into_dataframe(self) -> Result<DataFrame, ParserError> {
        let RawTable { headers, rows } = self;

        let mut values: Vec<Vec<Option<String>>> = headers
            .iter()
            .map(|_| Vec::with_capacity(rows.len()))
            .collect();
        for row in rows {
            for (column, cell) in values.iter_mut().zip(row) {
                column.push(cell);
            }
        }

        let columns: Vec<Column> = headers
            .iter()
            .zip(values)
            .map(|(name, data)| Series::new(name.as_str().into(), data).into())
            .collect();

        DataFrame::new(columns).map_err(|source| ParserError::Frame { source })
    }
}
