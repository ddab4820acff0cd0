//! Result extraction: walking libsql rows into a [`ResultSet`].

use deadpool_libsql::libsql;

use crate::error::AdapterError;
use crate::results::ResultSet;
use crate::types::RowValue;

/// Build a result set from executed libsql rows.
///
/// # Errors
///
/// Returns `AdapterError::ExecutionError` if row iteration or value
/// extraction fails.
pub async fn build_result_set(mut rows: libsql::Rows) -> Result<ResultSet, AdapterError> {
    let column_count = rows.column_count();
    let mut column_names = Vec::with_capacity(usize::try_from(column_count).map_err(|e| {
        AdapterError::ExecutionError(format!("Invalid column count: {e}"))
    })?);

    for i in 0..column_count {
        if let Some(name) = rows.column_name(i) {
            column_names.push(name.to_string());
        } else {
            column_names.push(format!("column_{i}"));
        }
    }

    let mut result_set = ResultSet::with_capacity(10);
    result_set.set_column_names(std::sync::Arc::new(column_names));

    while let Some(row) = rows
        .next()
        .await
        .map_err(|e| AdapterError::ExecutionError(format!("Failed to get next row: {e}")))?
    {
        let column_count = result_set.column_names().map_or(0, |names| names.len());
        let mut values = Vec::with_capacity(column_count);

        for i in 0..column_count {
            let idx = i32::try_from(i).map_err(|e| {
                AdapterError::ExecutionError(format!("Invalid column index: {e}"))
            })?;
            values.push(extract_value(&row, idx)?);
        }

        result_set.add_row_values(values);
    }

    Ok(result_set)
}

/// Extract a [`RowValue`] from a libsql row at the given index.
fn extract_value(row: &libsql::Row, idx: i32) -> Result<RowValue, AdapterError> {
    let value = row.get_value(idx).map_err(|e| {
        AdapterError::ExecutionError(format!("Failed to get value at index {idx}: {e}"))
    })?;

    Ok(match value {
        libsql::Value::Null => RowValue::Null,
        libsql::Value::Integer(i) => RowValue::Int(i),
        libsql::Value::Real(f) => RowValue::Float(f),
        libsql::Value::Text(s) => revive_text(s),
        libsql::Value::Blob(bytes) => RowValue::Blob(bytes),
    })
}

/// JSON documents and timestamps are stored as text; bring them back as
/// their typed values so callers don't have to re-parse.
fn revive_text(s: String) -> RowValue {
    if (s.starts_with('{') && s.ends_with('}')) || (s.starts_with('[') && s.ends_with(']')) {
        if let Ok(json_val) = serde_json::from_str(&s) {
            return RowValue::Json(json_val);
        }
    }

    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(&s, "%F %T%.f") {
        return RowValue::Timestamp(dt);
    }
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(&s, "%F %T") {
        return RowValue::Timestamp(dt);
    }

    RowValue::Text(s)
}
