pub mod batch;
pub mod cleaning;
pub mod config;
pub mod error;
pub mod inputs;
pub mod naming;
pub mod outputs;
pub mod schema;

pub use batch::{process_all, BatchReport, FileOutcome, FileReport};
pub use cleaning::{clean, CleanOutcome};
pub use config::NormalizerConfig;
pub use error::{PipelineError, Result};
pub use inputs::list_inputs;
pub use naming::derive_output_name;
pub use outputs::save;
pub use pitclean_parser::load;
pub use schema::{ExpectedSchema, CANONICAL_COLUMNS};
