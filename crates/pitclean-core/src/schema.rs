/// Canonical column names for point-in-time count tables, in file order.
pub const CANONICAL_COLUMNS: [&str; 5] = [
    "household_type",
    "emergency_shelter",
    "transitional_housing",
    "unsheltered",
    "total_population",
];

/// Ordered column names a cleaned table must end up with.
///
/// Validation is by count only: columns are renamed positionally and their
/// contents are never inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedSchema {
    columns: Vec<String>,
}

impl ExpectedSchema {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn matches_width(&self, width: usize) -> bool {
        width == self.columns.len()
    }
}

impl Default for ExpectedSchema {
    fn default() -> Self {
        Self::new(CANONICAL_COLUMNS)
    }
}
