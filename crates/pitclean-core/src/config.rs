use std::env;
use std::path::PathBuf;

use crate::schema::ExpectedSchema;

pub const DEFAULT_INPUT_DIR: &str = "/data/project-portfolio/CSV";
pub const DEFAULT_OUTPUT_DIR: &str = "/data/project-portfolio/Cleaned";
pub const DEFAULT_SUFFIX: &str = ".csv";

pub const INPUT_DIR_VAR: &str = "PITCLEAN_INPUT_DIR";
pub const OUTPUT_DIR_VAR: &str = "PITCLEAN_OUTPUT_DIR";

/// Where to read from, where to write to, and what a clean table looks like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizerConfig {
    pub input_dir: PathBuf,
    /// Must already exist; it is never created.
    pub output_dir: PathBuf,
    pub suffix: String,
    pub schema: ExpectedSchema,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            suffix: DEFAULT_SUFFIX.to_string(),
            schema: ExpectedSchema::default(),
        }
    }
}

impl NormalizerConfig {
    /// Compiled-in defaults, with the directories overridable through
    /// `PITCLEAN_INPUT_DIR` and `PITCLEAN_OUTPUT_DIR`.
    pub fn from_env() -> Self {
        Self::default().with_overrides(
            env::var_os(INPUT_DIR_VAR).map(PathBuf::from),
            env::var_os(OUTPUT_DIR_VAR).map(PathBuf::from),
        )
    }

    pub fn with_overrides(mut self, input_dir: Option<PathBuf>, output_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = input_dir {
            self.input_dir = dir;
        }
        if let Some(dir) = output_dir {
            self.output_dir = dir;
        }
        self
    }
}
