use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Values that can be stored in a database row or used as query parameters.
///
/// The same enum is used on both sides of the adapter boundary, so filter
/// values, insert data, and result rows all speak one type:
/// ```rust
/// use libsql_adapter::prelude::*;
///
/// let data = vec![
///     ("id".to_string(), RowValue::Text("u1".into())),
///     ("age".to_string(), RowValue::Int(28)),
///     ("active".to_string(), RowValue::Bool(true)),
/// ];
/// # let _ = data;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum RowValue {
    /// Integer value (64-bit)
    Int(i64),
    /// Floating point value (64-bit)
    Float(f64),
    /// Text/string value
    Text(String),
    /// Boolean value
    Bool(bool),
    /// Timestamp value
    Timestamp(NaiveDateTime),
    /// NULL value
    Null,
    /// JSON value
    Json(JsonValue),
    /// Binary data
    Blob(Vec<u8>),
}

impl RowValue {
    /// Check if this value is NULL
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub fn as_int(&self) -> Option<&i64> {
        if let RowValue::Int(value) = self {
            Some(value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        if let RowValue::Text(value) = self {
            Some(value)
        } else {
            None
        }
    }

    /// Boolean accessor; SQLite stores booleans as 0/1 integers, so those
    /// coerce too.
    #[must_use]
    pub fn as_bool(&self) -> Option<&bool> {
        if let RowValue::Bool(value) = self {
            return Some(value);
        } else if let Some(i) = self.as_int() {
            if *i == 1 {
                return Some(&true);
            } else if *i == 0 {
                return Some(&false);
            }
        }
        None
    }

    /// Timestamp accessor; text values in either SQLite datetime format
    /// coerce too.
    #[must_use]
    pub fn as_timestamp(&self) -> Option<NaiveDateTime> {
        if let RowValue::Timestamp(value) = self {
            return Some(*value);
        } else if let Some(s) = self.as_text() {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
                return Some(dt);
            }
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S.%3f") {
                return Some(dt);
            }
        }
        None
    }

    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        if let RowValue::Float(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_json(&self) -> Option<&JsonValue> {
        if let RowValue::Json(value) = self {
            Some(value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_blob(&self) -> Option<&[u8]> {
        if let RowValue::Blob(bytes) = self {
            Some(bytes)
        } else {
            None
        }
    }
}

/// The value side of a filter condition: a scalar for comparison operators,
/// a list for `in`.
#[derive(Debug, Clone, PartialEq)]
pub enum ConditionValue {
    /// A single bind value
    Single(RowValue),
    /// An ordered list of bind values
    Many(Vec<RowValue>),
}

impl From<RowValue> for ConditionValue {
    fn from(value: RowValue) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<RowValue>> for ConditionValue {
    fn from(values: Vec<RowValue>) -> Self {
        Self::Many(values)
    }
}

/// Logical connector on a filter condition.
///
/// Accepted for contract compatibility with the host framework; conditions
/// are currently always AND-joined regardless of this field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Connector {
    And,
    Or,
}

/// A single filter condition received from the host framework.
#[derive(Debug, Clone, PartialEq)]
pub struct WhereCondition {
    /// Column the condition applies to
    pub field: String,
    /// Value(s) to compare against
    pub value: ConditionValue,
    /// Operator name (`eq`, `ne`, `contains`, `starts_with`, `ends_with`,
    /// `lt`, `lte`, `gt`, `gte`, `in`); `eq` when absent
    pub operator: Option<String>,
    /// See [`Connector`]
    pub connector: Option<Connector>,
}

impl WhereCondition {
    /// Equality condition on `field`.
    #[must_use]
    pub fn new(field: impl Into<String>, value: impl Into<ConditionValue>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
            operator: None,
            connector: None,
        }
    }

    /// Condition with an explicit operator name.
    #[must_use]
    pub fn with_operator(
        field: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<ConditionValue>,
    ) -> Self {
        Self {
            operator: Some(operator.into()),
            ..Self::new(field, value)
        }
    }
}

/// Single-field sort order for `find_many`.
///
/// The direction is kept as the host framework sends it; only the literal
/// `"asc"` selects ascending order, anything else sorts descending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    pub direction: String,
}

impl SortSpec {
    #[must_use]
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: "asc".to_string(),
        }
    }

    #[must_use]
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: "desc".to_string(),
        }
    }
}

/// The storage operations of the adapter contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Create,
    Update,
    UpdateMany,
    Delete,
    DeleteMany,
    FindOne,
    FindMany,
    Count,
}

impl Operation {
    /// Operation name as the host framework spells it.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::UpdateMany => "updateMany",
            Operation::Delete => "delete",
            Operation::DeleteMany => "deleteMany",
            Operation::FindOne => "findOne",
            Operation::FindMany => "findMany",
            Operation::Count => "count",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
