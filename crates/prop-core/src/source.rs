//! Read-only access to named vectors of values
//!
//! The input assembler never owns the data it pairs up; it reads named
//! columns from a [`VectorSource`] passed in explicitly. Missing
//! observations are represented as `None` so that the assembler can prune
//! them instead of guessing.

/// A read-only store of named value vectors
///
/// Name comparisons are case-insensitive throughout, matching the host
/// conventions the original data came from.
pub trait VectorSource {
    /// Names of the vectors this source can produce
    fn names(&self) -> Vec<String>;

    /// Numeric values for a named vector, with missing entries as `None`
    ///
    /// Returns `None` when the name is unknown or the vector is not numeric.
    fn numeric(&self, name: &str) -> Option<Vec<Option<f64>>>;

    /// Display labels for a named vector
    ///
    /// Numeric vectors format their values; returns `None` for an unknown
    /// name.
    fn labels(&self, name: &str) -> Option<Vec<Option<String>>>;

    /// Whether a vector with this name exists (case-insensitive)
    fn contains(&self, name: &str) -> bool {
        self.names().iter().any(|n| n.eq_ignore_ascii_case(name))
    }
}

/// A single stored column
#[derive(Debug, Clone, PartialEq)]
enum Column {
    Numeric(Vec<Option<f64>>),
    Text(Vec<Option<String>>),
}

/// In-memory [`VectorSource`] backed by named columns
///
/// Used by tests and by library callers that already hold their data in
/// memory. Columns keep insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemorySource {
    columns: Vec<(String, Column)>,
}

impl MemorySource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a numeric column; `None` entries are missing observations
    pub fn with_numeric(
        mut self,
        name: impl Into<String>,
        values: Vec<Option<f64>>,
    ) -> Self {
        self.columns.push((name.into(), Column::Numeric(values)));
        self
    }

    /// Add a numeric column with every observation present
    pub fn with_values(self, name: impl Into<String>, values: Vec<f64>) -> Self {
        self.with_numeric(name, values.into_iter().map(Some).collect())
    }

    /// Add a text column, typically used for identifiers
    pub fn with_text(
        mut self,
        name: impl Into<String>,
        values: Vec<Option<String>>,
    ) -> Self {
        self.columns.push((name.into(), Column::Text(values)));
        self
    }

    fn find(&self, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, column)| column)
    }
}

impl VectorSource for MemorySource {
    fn names(&self) -> Vec<String> {
        self.columns.iter().map(|(n, _)| n.clone()).collect()
    }

    fn numeric(&self, name: &str) -> Option<Vec<Option<f64>>> {
        match self.find(name)? {
            Column::Numeric(values) => Some(values.clone()),
            Column::Text(_) => None,
        }
    }

    fn labels(&self, name: &str) -> Option<Vec<Option<String>>> {
        match self.find(name)? {
            Column::Numeric(values) => Some(
                values
                    .iter()
                    .map(|v| v.map(|x| format!("{x}")))
                    .collect(),
            ),
            Column::Text(values) => Some(values.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MemorySource {
        MemorySource::new()
            .with_values("n", vec![52.0, 55.0])
            .with_numeric("d", vec![Some(100.0), None])
            .with_text(
                "Region",
                vec![Some("east".to_string()), Some("west".to_string())],
            )
    }

    #[test]
    fn test_names_keep_insertion_order() {
        assert_eq!(sample().names(), vec!["n", "d", "Region"]);
    }

    #[test]
    fn test_case_insensitive_lookup() {
        let source = sample();
        assert!(source.contains("REGION"));
        assert!(source.contains("N"));
        assert!(!source.contains("missing"));
        assert_eq!(
            source.numeric("D").unwrap(),
            vec![Some(100.0), None]
        );
    }

    #[test]
    fn test_numeric_rejects_text_column() {
        assert!(sample().numeric("region").is_none());
    }

    #[test]
    fn test_labels_format_numeric_values() {
        let labels = sample().labels("n").unwrap();
        assert_eq!(labels, vec![Some("52".to_string()), Some("55".to_string())]);
    }

    #[test]
    fn test_labels_preserve_missing() {
        let labels = sample().labels("d").unwrap();
        assert_eq!(labels, vec![Some("100".to_string()), None]);
    }
}
