pub const SOURCE_PREFIX: &str = "tabula-";
pub const CLEANED_PREFIX: &str = "cleaned_";

/// Output file name for an input file name: every `tabula-` becomes `cleaned_`.
/// Names without the marker pass through unchanged.
pub fn derive_output_name(input_name: &str) -> String {
    input_name.replace(SOURCE_PREFIX, CLEANED_PREFIX)
}
