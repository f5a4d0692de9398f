use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::cleaning::{clean, CleanOutcome};
use crate::error::Result;
use crate::naming::derive_output_name;
use crate::outputs::save;
use crate::schema::ExpectedSchema;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Written { output: PathBuf, rows: usize },
    ColumnMismatch { observed: Vec<String> },
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub file_name: String,
    pub outcome: FileOutcome,
}

impl fmt::Display for FileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            FileOutcome::Written { .. } => write!(f, "Processed {} successfully.", self.file_name),
            FileOutcome::ColumnMismatch { observed } => write!(
                f,
                "Warning: Column mismatch. Skipping {} with columns: [{}]",
                self.file_name,
                observed.join(", ")
            ),
            FileOutcome::Failed { reason } => {
                write!(f, "Error processing {}: {}", self.file_name, reason)
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub reports: Vec<FileReport>,
}

impl BatchReport {
    pub fn written(&self) -> usize {
        self.count(|outcome| matches!(outcome, FileOutcome::Written { .. }))
    }

    pub fn mismatched(&self) -> usize {
        self.count(|outcome| matches!(outcome, FileOutcome::ColumnMismatch { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|outcome| matches!(outcome, FileOutcome::Failed { .. }))
    }

    pub fn completion_line(&self) -> String {
        format!(
            "Data cleaning and normalization complete. {} written, {} skipped, {} failed.",
            self.written(),
            self.mismatched(),
            self.failed()
        )
    }

    fn count(&self, predicate: impl Fn(&FileOutcome) -> bool) -> usize {
        self.reports
            .iter()
            .filter(|report| predicate(&report.outcome))
            .count()
    }
}

/// Loads, cleans, and saves every input in order. Per-file failures end up in
/// the report; nothing here aborts the batch.
pub fn process_all(inputs: &[PathBuf], output_dir: &Path, expected: &ExpectedSchema) -> BatchReport {
    let mut reports = Vec::with_capacity(inputs.len());
    let mut claimed: HashMap<String, String> = HashMap::new();

    for input in inputs {
        let file_name = input
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| input.display().to_string());
        let output_name = derive_output_name(&file_name);

        if let Some(previous) = claimed.insert(output_name.clone(), file_name.clone()) {
            warn!(
                output = %output_name,
                first = %previous,
                second = %file_name,
                "two inputs map to the same output file; the later one overwrites"
            );
        }

        let output = output_dir.join(&output_name);
        let outcome = match process_file(input, &output, expected) {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(file = %file_name, error = %err, "failed to process file");
                FileOutcome::Failed {
                    reason: err.to_string(),
                }
            }
        };

        match &outcome {
            FileOutcome::Written { output, rows } => {
                info!(file = %file_name, output = %output.display(), rows, "cleaned file written");
            }
            FileOutcome::ColumnMismatch { observed } => {
                warn!(file = %file_name, ?observed, "column mismatch, skipping file");
            }
            FileOutcome::Failed { .. } => {}
        }

        reports.push(FileReport { file_name, outcome });
    }

    BatchReport { reports }
}

fn process_file(input: &Path, output: &Path, expected: &ExpectedSchema) -> Result<FileOutcome> {
    let df = pitclean_parser::load(input)?;

    match clean(df, expected)? {
        CleanOutcome::Cleaned(mut cleaned) => {
            save(&mut cleaned, output)?;
            Ok(FileOutcome::Written {
                output: output.to_path_buf(),
                rows: cleaned.height(),
            })
        }
        CleanOutcome::ColumnMismatch { observed } => Ok(FileOutcome::ColumnMismatch { observed }),
    }
}
