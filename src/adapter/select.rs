use serde_json::json;

use super::LibsqlAdapter;
use crate::clause::build_where_clause;
use crate::error::AdapterError;
use crate::executor;
use crate::results::Record;
use crate::types::{Operation, RowValue, SortSpec, WhereCondition};

impl LibsqlAdapter {
    /// Fetch the first matching row, or `None`.
    ///
    /// # Errors
    ///
    /// Returns `AdapterError` on an invalid filter or client-level failure.
    pub async fn find_one(
        &self,
        model: &str,
        filter: &[WhereCondition],
        select: Option<&[String]>,
    ) -> Result<Option<Record>, AdapterError> {
        let table = self.table_name(model);
        let clause = build_where_clause(filter)?;

        let select_clause = match select {
            Some(cols) if !cols.is_empty() => cols.join(", "),
            _ => "*".to_string(),
        };
        let sql = format!("SELECT {select_clause} FROM {table}{} LIMIT 1", clause.sql);

        self.debug_log(Operation::FindOne, &json!({ "model": model, "sql": sql }));

        let conn = self.connection(Operation::FindOne).await?;
        let result = executor::execute_select(&conn, &sql, &clause.params)
            .await
            .map_err(|e| AdapterError::operation_failed(Operation::FindOne, e))?;

        Ok(result.results.into_iter().next())
    }

    /// Fetch matching rows with optional ordering and pagination.
    ///
    /// ORDER BY is appended only when `sort_by` is present; LIMIT and OFFSET
    /// only when present and non-zero, matching the host contract's loose
    /// truthiness.
    ///
    /// # Errors
    ///
    /// Returns `AdapterError` on an invalid filter or client-level failure.
    pub async fn find_many(
        &self,
        model: &str,
        filter: &[WhereCondition],
        sort_by: Option<&SortSpec>,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Record>, AdapterError> {
        let table = self.table_name(model);
        let clause = build_where_clause(filter)?;

        let mut sql = format!("SELECT * FROM {table}{}", clause.sql);
        let mut params = clause.params;

        if let Some(sort) = sort_by {
            // only the literal "asc" sorts ascending
            let direction = if sort.direction == "asc" { "ASC" } else { "DESC" };
            sql.push_str(&format!(" ORDER BY {} {direction}", sort.field));
        }

        if let Some(limit) = limit.filter(|&limit| limit != 0) {
            sql.push_str(" LIMIT ?");
            params.push(RowValue::Int(limit));
        }

        if let Some(offset) = offset.filter(|&offset| offset != 0) {
            sql.push_str(" OFFSET ?");
            params.push(RowValue::Int(offset));
        }

        self.debug_log(Operation::FindMany, &json!({ "model": model, "sql": sql }));

        let conn = self.connection(Operation::FindMany).await?;
        let result = executor::execute_select(&conn, &sql, &params)
            .await
            .map_err(|e| AdapterError::operation_failed(Operation::FindMany, e))?;

        Ok(result.results)
    }

    /// Count matching rows.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::InvalidCountResult`] if the count row is
    /// missing or malformed, or `AdapterError` on an invalid filter or
    /// client-level failure.
    pub async fn count(
        &self,
        model: &str,
        filter: &[WhereCondition],
    ) -> Result<i64, AdapterError> {
        let table = self.table_name(model);
        let clause = build_where_clause(filter)?;

        let sql = format!("SELECT COUNT(*) as count FROM {table}{}", clause.sql);

        self.debug_log(Operation::Count, &json!({ "model": model, "sql": sql }));

        let conn = self.connection(Operation::Count).await?;
        let result = executor::execute_select(&conn, &sql, &clause.params)
            .await
            .map_err(|e| AdapterError::operation_failed(Operation::Count, e))?;

        result
            .results
            .first()
            .and_then(|row| row.get("count"))
            .and_then(RowValue::as_int)
            .copied()
            .ok_or_else(|| AdapterError::InvalidCountResult {
                table: table.into_owned(),
            })
    }
}
