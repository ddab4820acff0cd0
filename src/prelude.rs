//! Convenient imports for common functionality.
//!
//! This module re-exports the most commonly used types and functions
//! to make it easier to get started with the adapter.

pub use crate::adapter::{LibsqlAdapter, StorageAdapter};
pub use crate::clause::{WhereClause, build_where_clause};
pub use crate::config::{DebugLogs, LibsqlOptions, LibsqlOptionsBuilder};
pub use crate::error::AdapterError;
pub use crate::executor::{execute_dml, execute_select};
pub use crate::query::build_result_set;
pub use crate::results::{Record, ResultSet};
pub use crate::types::{
    ConditionValue, Connector, Operation, RowValue, SortSpec, WhereCondition,
};
