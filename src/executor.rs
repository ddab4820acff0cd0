//! Statement execution against pooled libsql connections.
//!
//! The one suspension point per adapter operation lives here: each call
//! executes exactly one statement and normalizes the client's response.

use deadpool_libsql::Object;

use crate::error::AdapterError;
use crate::params::Params;
use crate::query::build_result_set;
use crate::results::ResultSet;
use crate::types::RowValue;

/// Execute a row-returning statement (SELECT, or DML with RETURNING) and
/// collect the rows.
///
/// # Errors
///
/// Returns `AdapterError::ExecutionError` if parameter conversion or query
/// execution fails.
pub async fn execute_select(
    conn: &Object,
    sql: &str,
    params: &[RowValue],
) -> Result<ResultSet, AdapterError> {
    let params = Params::convert(params)?;

    let rows = conn.query(sql, params.into_vec()).await.map_err(|e| {
        AdapterError::ExecutionError(format!("Failed to execute query: {e}"))
    })?;

    build_result_set(rows).await
}

/// Execute a DML statement (INSERT, UPDATE, DELETE) and return the number of
/// affected rows.
///
/// # Errors
///
/// Returns `AdapterError::ExecutionError` if the transaction, execution, or
/// commit fails.
pub async fn execute_dml(
    conn: &Object,
    sql: &str,
    params: &[RowValue],
) -> Result<usize, AdapterError> {
    let params = Params::convert(params)?;

    let tx = conn.transaction().await.map_err(|e| {
        AdapterError::ExecutionError(format!("Failed to begin transaction: {e}"))
    })?;

    let rows_affected = tx
        .execute(sql, params.into_vec())
        .await
        .map_err(|e| AdapterError::ExecutionError(format!("Failed to execute DML: {e}")))?;

    tx.commit().await.map_err(|e| {
        AdapterError::ExecutionError(format!("Failed to commit transaction: {e}"))
    })?;

    usize::try_from(rows_affected).map_err(|e| {
        AdapterError::ExecutionError(format!("Affected row count conversion error: {e}"))
    })
}
