use thiserror::Error;

use crate::types::Operation;

#[derive(Debug, Error)]
pub enum AdapterError {
    /// Unrecognized filter operator; raised before any SQL executes.
    #[error("Unsupported operator: {0}")]
    UnsupportedOperator(String),

    /// An insert reported zero returned rows.
    #[error("Failed to create record in {table}")]
    CreateFailed { table: String },

    /// A count query came back without a usable `count` column.
    #[error("Count query returned invalid result for {table}")]
    InvalidCountResult { table: String },

    /// Client-level failure during an operation, tagged with the operation
    /// name and the underlying message.
    #[error("{operation} operation failed: {message}")]
    OperationFailed {
        operation: Operation,
        message: String,
    },

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Parameter conversion error: {0}")]
    ParameterError(String),

    #[error("SQL execution error: {0}")]
    ExecutionError(String),
}

impl AdapterError {
    pub(crate) fn operation_failed(operation: Operation, err: impl std::fmt::Display) -> Self {
        Self::OperationFailed {
            operation,
            message: err.to_string(),
        }
    }
}
