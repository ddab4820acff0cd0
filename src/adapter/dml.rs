use serde_json::json;

use super::LibsqlAdapter;
use crate::clause::build_where_clause;
use crate::error::AdapterError;
use crate::executor;
use crate::results::Record;
use crate::types::{Operation, RowValue, WhereCondition};

impl LibsqlAdapter {
    /// Insert one record and return the stored row.
    ///
    /// The `id` field is dropped from the data unless `force_allow_id` is
    /// set; the host framework generates ids itself and opts in explicitly
    /// when it wants to supply one.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::CreateFailed`] if the insert reports no
    /// returned row, or [`AdapterError::OperationFailed`] on client-level
    /// failure.
    pub async fn create(
        &self,
        model: &str,
        data: &[(String, RowValue)],
        select: Option<&[String]>,
        force_allow_id: bool,
    ) -> Result<Record, AdapterError> {
        let table = self.table_name(model);

        let mut columns = Vec::with_capacity(data.len());
        let mut values = Vec::with_capacity(data.len());
        for (column, value) in data {
            if column == "id" && !force_allow_id {
                continue;
            }
            columns.push(column.as_str());
            values.push(value.clone());
        }

        let placeholders = vec!["?"; columns.len()].join(", ");
        let select_clause = match select {
            Some(cols) if !cols.is_empty() => cols.join(", "),
            _ => "*".to_string(),
        };
        let sql = format!(
            "INSERT INTO {table} ({}) VALUES ({placeholders}) RETURNING {select_clause}",
            columns.join(", ")
        );

        self.debug_log(
            Operation::Create,
            &json!({ "model": model, "sql": sql, "forceAllowId": force_allow_id }),
        );

        let conn = self.connection(Operation::Create).await?;
        let result = executor::execute_select(&conn, &sql, &values)
            .await
            .map_err(|e| AdapterError::operation_failed(Operation::Create, e))?;

        result
            .results
            .into_iter()
            .next()
            .ok_or_else(|| AdapterError::CreateFailed {
                table: table.into_owned(),
            })
    }

    /// Update matching rows and return the first updated row, or `None` when
    /// nothing matched.
    ///
    /// # Errors
    ///
    /// Returns `AdapterError` on an invalid filter or client-level failure.
    pub async fn update(
        &self,
        model: &str,
        filter: &[WhereCondition],
        update: &[(String, RowValue)],
    ) -> Result<Option<Record>, AdapterError> {
        let table = self.table_name(model);
        let clause = build_where_clause(filter)?;

        let set_clause = update
            .iter()
            .map(|(column, _)| format!("{column} = ?"))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!("UPDATE {table} SET {set_clause}{} RETURNING *", clause.sql);

        // update values bind first, then the filter params
        let mut params: Vec<RowValue> = update.iter().map(|(_, value)| value.clone()).collect();
        params.extend(clause.params);

        self.debug_log(Operation::Update, &json!({ "model": model, "sql": sql }));

        let conn = self.connection(Operation::Update).await?;
        let result = executor::execute_select(&conn, &sql, &params)
            .await
            .map_err(|e| AdapterError::operation_failed(Operation::Update, e))?;

        Ok(result.results.into_iter().next())
    }

    /// Update matching rows and return the affected row count.
    ///
    /// # Errors
    ///
    /// Returns `AdapterError` on an invalid filter or client-level failure.
    pub async fn update_many(
        &self,
        model: &str,
        filter: &[WhereCondition],
        update: &[(String, RowValue)],
    ) -> Result<usize, AdapterError> {
        let table = self.table_name(model);
        let clause = build_where_clause(filter)?;

        let set_clause = update
            .iter()
            .map(|(column, _)| format!("{column} = ?"))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!("UPDATE {table} SET {set_clause}{}", clause.sql);

        let mut params: Vec<RowValue> = update.iter().map(|(_, value)| value.clone()).collect();
        params.extend(clause.params);

        self.debug_log(Operation::UpdateMany, &json!({ "model": model, "sql": sql }));

        let conn = self.connection(Operation::UpdateMany).await?;
        executor::execute_dml(&conn, &sql, &params)
            .await
            .map_err(|e| AdapterError::operation_failed(Operation::UpdateMany, e))
    }

    /// Delete matching rows, discarding the count. Succeeds whether or not
    /// any row matched.
    ///
    /// # Errors
    ///
    /// Returns `AdapterError` on an invalid filter or client-level failure.
    pub async fn delete(
        &self,
        model: &str,
        filter: &[WhereCondition],
    ) -> Result<(), AdapterError> {
        let table = self.table_name(model);
        let clause = build_where_clause(filter)?;
        let sql = format!("DELETE FROM {table}{}", clause.sql);

        self.debug_log(Operation::Delete, &json!({ "model": model, "sql": sql }));

        let conn = self.connection(Operation::Delete).await?;
        executor::execute_dml(&conn, &sql, &clause.params)
            .await
            .map_err(|e| AdapterError::operation_failed(Operation::Delete, e))?;

        Ok(())
    }

    /// Delete matching rows and return the affected row count.
    ///
    /// # Errors
    ///
    /// Returns `AdapterError` on an invalid filter or client-level failure.
    pub async fn delete_many(
        &self,
        model: &str,
        filter: &[WhereCondition],
    ) -> Result<usize, AdapterError> {
        let table = self.table_name(model);
        let clause = build_where_clause(filter)?;
        let sql = format!("DELETE FROM {table}{}", clause.sql);

        self.debug_log(Operation::DeleteMany, &json!({ "model": model, "sql": sql }));

        let conn = self.connection(Operation::DeleteMany).await?;
        executor::execute_dml(&conn, &sql, &clause.params)
            .await
            .map_err(|e| AdapterError::operation_failed(Operation::DeleteMany, e))
    }
}
