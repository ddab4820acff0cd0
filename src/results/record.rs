use std::collections::HashMap;
use std::sync::Arc;

use crate::types::RowValue;

/// One row returned by the database.
///
/// Column names are shared across all rows of a result set; values are
/// addressable by column name or position.
#[derive(Debug, Clone)]
pub struct Record {
    columns: Arc<Vec<String>>,
    values: Vec<RowValue>,
    // name -> index, built once per result set
    column_index: Arc<HashMap<String, usize>>,
}

impl Record {
    #[must_use]
    pub fn new(columns: Arc<Vec<String>>, values: Vec<RowValue>) -> Self {
        let column_index = Arc::new(
            columns
                .iter()
                .enumerate()
                .map(|(i, name)| (name.clone(), i))
                .collect::<HashMap<_, _>>(),
        );

        Self {
            columns,
            values,
            column_index,
        }
    }

    pub(crate) fn with_index(
        columns: Arc<Vec<String>>,
        values: Vec<RowValue>,
        column_index: Arc<HashMap<String, usize>>,
    ) -> Self {
        Self {
            columns,
            values,
            column_index,
        }
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn values(&self) -> &[RowValue] {
        &self.values
    }

    /// Get a value by column name, or `None` if the column isn't present.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&RowValue> {
        let index = self
            .column_index
            .get(column)
            .copied()
            .or_else(|| self.columns.iter().position(|c| c == column))?;
        self.values.get(index)
    }

    /// Get a value by column position.
    #[must_use]
    pub fn get_by_index(&self, index: usize) -> Option<&RowValue> {
        self.values.get(index)
    }
}
