use std::collections::BTreeMap;

use thiserror::Error;

// ---------------------------------------------------------------------------
// TableError
// ---------------------------------------------------------------------------

/// Errors raised when querying a loaded table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    /// The requested header is absent, or present but not numeric.
    #[error("column '{name}' not found in table")]
    MissingColumn { name: String },
}

// ---------------------------------------------------------------------------
// DataTable – one loaded measurement file
// ---------------------------------------------------------------------------

/// An in-memory measurement table: one row per frequency sample, columns
/// addressed by header string.
///
/// `headers` preserves the source file's column order, including columns
/// that turned out to be non-numeric; only numeric columns are queryable
/// through [`DataTable::column`].
#[derive(Debug, Clone, Default)]
pub struct DataTable {
    /// Every header present in the source, in file order.
    pub headers: Vec<String>,
    /// Numeric columns by header name. All vectors share the same length.
    columns: BTreeMap<String, Vec<f64>>,
    n_rows: usize,
}

impl DataTable {
    pub fn new(headers: Vec<String>, columns: BTreeMap<String, Vec<f64>>, n_rows: usize) -> Self {
        DataTable {
            headers,
            columns,
            n_rows,
        }
    }

    /// Number of data rows.
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Headers of the columns that are actually numeric.
    pub fn numeric_headers(&self) -> impl Iterator<Item = &str> {
        self.headers
            .iter()
            .filter(|h| self.columns.contains_key(h.as_str()))
            .map(String::as_str)
    }

    /// Look up a numeric column by its header.
    pub fn column(&self, name: &str) -> Result<&[f64], TableError> {
        self.columns
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| TableError::MissingColumn {
                name: name.to_string(),
            })
    }

    /// Apply raw-header → friendly-name aliases, in place.
    ///
    /// Headers without an alias keep their raw name.
    pub fn renamed(mut self, aliases: &BTreeMap<String, String>) -> Self {
        if aliases.is_empty() {
            return self;
        }
        for header in &mut self.headers {
            if let Some(friendly) = aliases.get(header) {
                if let Some(values) = self.columns.remove(header) {
                    self.columns.insert(friendly.clone(), values);
                }
                *header = friendly.clone();
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> DataTable {
        let mut columns = BTreeMap::new();
        columns.insert("Freq".to_string(), vec![1.0, 2.0, 3.0]);
        columns.insert("S11".to_string(), vec![-10.0, -12.0, -9.0]);
        DataTable::new(
            vec!["Freq".to_string(), "Note".to_string(), "S11".to_string()],
            columns,
            3,
        )
    }

    #[test]
    fn column_lookup_returns_the_values() {
        let t = table();
        assert_eq!(t.column("S11").unwrap(), &[-10.0, -12.0, -9.0]);
        assert_eq!(t.n_rows(), 3);
    }

    #[test]
    fn missing_column_reports_the_expected_header() {
        let err = table().column("S21").unwrap_err();
        assert_eq!(
            err,
            TableError::MissingColumn {
                name: "S21".to_string()
            }
        );
    }

    #[test]
    fn non_numeric_header_is_listed_but_not_queryable() {
        let t = table();
        assert!(t.headers.contains(&"Note".to_string()));
        assert!(t.column("Note").is_err());
        let numeric: Vec<&str> = t.numeric_headers().collect();
        assert_eq!(numeric, vec!["Freq", "S11"]);
    }

    #[test]
    fn renaming_moves_the_column_data() {
        let aliases = BTreeMap::from([("Freq".to_string(), "Frequency (Hz)".to_string())]);
        let t = table().renamed(&aliases);
        assert_eq!(t.column("Frequency (Hz)").unwrap(), &[1.0, 2.0, 3.0]);
        assert!(t.column("Freq").is_err());
        assert_eq!(t.headers[0], "Frequency (Hz)");
    }
}
