use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use polars::prelude::*;
use tracing::debug;

use crate::error::{PipelineError, Result};

/// Writes `df` as CSV with a header row and no index column, replacing any
/// existing file at `path`. Missing cells are written as empty fields.
pub fn save(df: &mut DataFrame, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|err| PipelineError::io(path, err))?;
    let mut writer = BufWriter::new(file);

    CsvWriter::new(&mut writer)
        .include_header(true)
        .with_separator(b',')
        .finish(df)?;
    writer.flush().map_err(|err| PipelineError::io(path, err))?;

    debug!(path = %path.display(), rows = df.height(), "saved csv");
    Ok(())
}
