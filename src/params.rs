//! Parameter conversion between adapter values and libsql values.

use deadpool_libsql::libsql;

use crate::error::AdapterError;
use crate::types::RowValue;

/// Container for converted libsql parameters.
pub struct Params(Vec<libsql::Value>);

impl Params {
    /// Convert a slice of [`RowValue`] to libsql parameters.
    ///
    /// Booleans become 0/1 integers, timestamps their SQLite text form, and
    /// JSON its compact string encoding.
    ///
    /// # Errors
    ///
    /// Returns `AdapterError` if a value cannot be represented as a libsql
    /// parameter.
    pub fn convert(params: &[RowValue]) -> Result<Params, AdapterError> {
        let mut converted = Vec::with_capacity(params.len());

        for param in params {
            let value = match param {
                RowValue::Int(i) => libsql::Value::Integer(*i),
                RowValue::Float(f) => libsql::Value::Real(*f),
                RowValue::Text(s) => libsql::Value::Text(s.clone()),
                RowValue::Bool(b) => libsql::Value::Integer(i64::from(*b)),
                RowValue::Timestamp(dt) => {
                    libsql::Value::Text(dt.format("%F %T%.f").to_string())
                }
                RowValue::Null => libsql::Value::Null,
                RowValue::Json(jval) => libsql::Value::Text(jval.to_string()),
                RowValue::Blob(bytes) => libsql::Value::Blob(bytes.clone()),
            };
            converted.push(value);
        }

        Ok(Params(converted))
    }

    /// Get a reference to the underlying parameter array
    #[must_use]
    pub fn as_slice(&self) -> &[libsql::Value] {
        &self.0
    }

    /// Convert to owned vector for use with the libsql API
    #[must_use]
    pub fn into_vec(self) -> Vec<libsql::Value> {
        self.0
    }
}
