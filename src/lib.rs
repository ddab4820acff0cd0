//! CRUD-to-SQL translation for libsql and Turso databases.
//!
//! This crate implements the generic storage contract that host
//! authentication frameworks program against: seven structured operations
//! (`create`, `update`, `update_many`, `delete`, `delete_many`, `find_one`,
//! `find_many`, `count`) are compiled into parameterized SQL statements and
//! executed over a pooled libsql connection.
//!
//! Module layout:
//! - [`clause`]: WHERE clause compilation from structured filter conditions
//! - [`adapter`]: the operation mapper and the [`StorageAdapter`] contract
//! - [`config`]: connection options (local, remote, embedded replica) and
//!   pool setup
//! - [`params`] / [`query`] / [`executor`]: parameter conversion, result
//!   extraction, and statement execution glue
//! - [`results`] / [`types`]: the value, row, and condition types crossing
//!   the adapter boundary
//!
//! ```rust,no_run
//! use libsql_adapter::prelude::*;
//!
//! # async fn demo() -> Result<(), AdapterError> {
//! let (adapter, pool) = LibsqlOptionsBuilder::new("file:./auth.db")
//!     .use_plural(false)
//!     .build()
//!     .await?;
//!
//! let user = adapter
//!     .find_one(
//!         "user",
//!         &[WhereCondition::new("email", RowValue::Text("alice@example.com".into()))],
//!         None,
//!     )
//!     .await?;
//! # let _ = (user, pool);
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod clause;
pub mod config;
pub mod error;
pub mod executor;
pub mod params;
pub mod prelude;
pub mod query;
pub mod results;
pub mod types;

pub use adapter::{LibsqlAdapter, StorageAdapter};
pub use clause::{WhereClause, build_where_clause};
pub use config::{DebugLogs, LibsqlOptions, LibsqlOptionsBuilder};
pub use error::AdapterError;
pub use results::{Record, ResultSet};
pub use types::{ConditionValue, Connector, Operation, RowValue, SortSpec, WhereCondition};
