use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PipelineError, Result};

/// Lists entries directly under `directory` whose file name ends with `suffix`,
/// sorted by name. An unreadable or missing directory is an error.
pub fn list_inputs(directory: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(directory).map_err(|err| PipelineError::io(directory, err))?;

    let mut inputs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| PipelineError::io(directory, err))?;
        if entry.file_name().to_string_lossy().ends_with(suffix) {
            inputs.push(entry.path());
        }
    }
    inputs.sort();

    Ok(inputs)
}
