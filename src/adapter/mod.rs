//! The storage operations consumed by the host framework.
//!
//! - `dml`: create/update/delete operations
//! - `select`: find/count operations
//!
//! Each operation checks out one pooled connection, fires the debug log,
//! executes a single statement, and normalizes the result.

mod dml;
mod select;

use std::borrow::Cow;

use async_trait::async_trait;
use deadpool_libsql::{Object, Pool};
use serde_json::Value as JsonValue;

use crate::config::{self, LibsqlOptions};
use crate::error::AdapterError;
use crate::results::Record;
use crate::types::{Operation, RowValue, SortSpec, WhereCondition};

/// The generic storage contract a host framework programs against.
///
/// All operations are independently asynchronous; the adapter imposes no
/// ordering between concurrent calls.
#[async_trait]
pub trait StorageAdapter {
    /// Insert one record and return the stored row.
    async fn create(
        &self,
        model: &str,
        data: &[(String, RowValue)],
        select: Option<&[String]>,
        force_allow_id: bool,
    ) -> Result<Record, AdapterError>;

    /// Update matching rows and return the first updated row, or `None` when
    /// nothing matched.
    async fn update(
        &self,
        model: &str,
        filter: &[WhereCondition],
        update: &[(String, RowValue)],
    ) -> Result<Option<Record>, AdapterError>;

    /// Update matching rows and return the affected row count.
    async fn update_many(
        &self,
        model: &str,
        filter: &[WhereCondition],
        update: &[(String, RowValue)],
    ) -> Result<usize, AdapterError>;

    /// Delete matching rows; succeeds whether or not any row matched.
    async fn delete(&self, model: &str, filter: &[WhereCondition]) -> Result<(), AdapterError>;

    /// Delete matching rows and return the affected row count.
    async fn delete_many(
        &self,
        model: &str,
        filter: &[WhereCondition],
    ) -> Result<usize, AdapterError>;

    /// Fetch the first matching row.
    async fn find_one(
        &self,
        model: &str,
        filter: &[WhereCondition],
        select: Option<&[String]>,
    ) -> Result<Option<Record>, AdapterError>;

    /// Fetch matching rows with optional ordering and pagination.
    async fn find_many(
        &self,
        model: &str,
        filter: &[WhereCondition],
        sort_by: Option<&SortSpec>,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Record>, AdapterError>;

    /// Count matching rows.
    async fn count(&self, model: &str, filter: &[WhereCondition]) -> Result<i64, AdapterError>;
}

/// LibSQL-backed implementation of [`StorageAdapter`].
#[derive(Clone)]
pub struct LibsqlAdapter {
    pool: Pool,
    options: LibsqlOptions,
}

impl LibsqlAdapter {
    /// Connect to the configured database and return the adapter together
    /// with a handle to the underlying pool, so callers (and tests) can run
    /// raw statements against the same database.
    ///
    /// # Errors
    ///
    /// Returns `AdapterError::ConnectionError` if database or pool creation
    /// fails.
    pub async fn connect(options: LibsqlOptions) -> Result<(Self, Pool), AdapterError> {
        let pool = config::build_pool(&options).await?;
        let adapter = Self {
            pool: pool.clone(),
            options,
        };
        Ok((adapter, pool))
    }

    #[must_use]
    pub fn options(&self) -> &LibsqlOptions {
        &self.options
    }

    pub(crate) async fn connection(&self, operation: Operation) -> Result<Object, AdapterError> {
        self.pool
            .get()
            .await
            .map_err(|e| AdapterError::operation_failed(operation, e))
    }

    pub(crate) fn table_name<'a>(&self, model: &'a str) -> Cow<'a, str> {
        if self.options.use_plural {
            Cow::Owned(format!("{model}s"))
        } else {
            Cow::Borrowed(model)
        }
    }

    /// Advisory observability side-channel; never affects control flow.
    pub(crate) fn debug_log(&self, operation: Operation, details: &JsonValue) {
        if self.options.debug_logs.enabled(operation) {
            tracing::debug!(
                target: "libsql_adapter",
                operation = %operation,
                details = %details,
                "executing operation"
            );
        }
    }
}

#[async_trait]
impl StorageAdapter for LibsqlAdapter {
    async fn create(
        &self,
        model: &str,
        data: &[(String, RowValue)],
        select: Option<&[String]>,
        force_allow_id: bool,
    ) -> Result<Record, AdapterError> {
        LibsqlAdapter::create(self, model, data, select, force_allow_id).await
    }

    async fn update(
        &self,
        model: &str,
        filter: &[WhereCondition],
        update: &[(String, RowValue)],
    ) -> Result<Option<Record>, AdapterError> {
        LibsqlAdapter::update(self, model, filter, update).await
    }

    async fn update_many(
        &self,
        model: &str,
        filter: &[WhereCondition],
        update: &[(String, RowValue)],
    ) -> Result<usize, AdapterError> {
        LibsqlAdapter::update_many(self, model, filter, update).await
    }

    async fn delete(&self, model: &str, filter: &[WhereCondition]) -> Result<(), AdapterError> {
        LibsqlAdapter::delete(self, model, filter).await
    }

    async fn delete_many(
        &self,
        model: &str,
        filter: &[WhereCondition],
    ) -> Result<usize, AdapterError> {
        LibsqlAdapter::delete_many(self, model, filter).await
    }

    async fn find_one(
        &self,
        model: &str,
        filter: &[WhereCondition],
        select: Option<&[String]>,
    ) -> Result<Option<Record>, AdapterError> {
        LibsqlAdapter::find_one(self, model, filter, select).await
    }

    async fn find_many(
        &self,
        model: &str,
        filter: &[WhereCondition],
        sort_by: Option<&SortSpec>,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Record>, AdapterError> {
        LibsqlAdapter::find_many(self, model, filter, sort_by, limit, offset).await
    }

    async fn count(&self, model: &str, filter: &[WhereCondition]) -> Result<i64, AdapterError> {
        LibsqlAdapter::count(self, model, filter).await
    }
}
