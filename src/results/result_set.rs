use std::collections::HashMap;
use std::sync::Arc;

use super::Record;
use crate::types::RowValue;

/// Normalized result of one statement execution: the returned rows plus a
/// row count.
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    /// The rows returned by the statement
    pub results: Vec<Record>,
    /// The number of rows accumulated
    pub rows_affected: usize,
    // Shared by all rows to avoid duplicating names per row
    column_names: Option<Arc<Vec<String>>>,
    column_index: Option<Arc<HashMap<String, usize>>>,
}

impl ResultSet {
    /// Create a result set with preallocated row capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> ResultSet {
        ResultSet {
            results: Vec::with_capacity(capacity),
            ..ResultSet::default()
        }
    }

    /// Set the column names shared by every row of this result set and build
    /// the name lookup index once.
    pub fn set_column_names(&mut self, column_names: Arc<Vec<String>>) {
        let index = column_names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect::<HashMap<_, _>>();
        self.column_index = Some(Arc::new(index));
        self.column_names = Some(column_names);
    }

    #[must_use]
    pub fn column_names(&self) -> Option<&Arc<Vec<String>>> {
        self.column_names.as_ref()
    }

    /// Append a row sharing this result set's column table. A no-op until
    /// column names have been set.
    pub fn add_row_values(&mut self, values: Vec<RowValue>) {
        let (Some(columns), Some(index)) = (self.column_names.clone(), self.column_index.clone())
        else {
            return;
        };
        self.results.push(Record::with_index(columns, values, index));
        self.rows_affected += 1;
    }
}
