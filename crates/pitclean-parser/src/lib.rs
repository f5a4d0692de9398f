pub mod errors;
pub mod model;
mod reader;

pub use errors::ParserError;
pub use model::RawTable;
pub use reader::{is_missing, load, parse_table, read_raw_table, NA_VALUES};

#[cfg(test)]
mod tests;
