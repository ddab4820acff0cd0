//! WHERE clause compilation.
//!
//! Turns the host framework's structured filter conditions into a
//! parameterized SQL fragment plus its positional bind values.

use crate::error::AdapterError;
use crate::types::{ConditionValue, RowValue, WhereCondition};

/// A compiled WHERE fragment and its bind parameters.
///
/// `sql` is either empty or a leading-space `" WHERE ..."` fragment ready to
/// append to a statement. `params` is index-aligned with the `?` placeholders
/// in `sql`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WhereClause {
    pub sql: String,
    pub params: Vec<RowValue>,
}

/// Compile filter conditions into a [`WhereClause`].
///
/// Conditions are joined with `AND`; the per-condition `connector` field is
/// accepted but not consulted. An `in` condition with an empty list (or a
/// scalar value) contributes no fragment at all.
///
/// # Errors
///
/// Returns [`AdapterError::UnsupportedOperator`] for an unrecognized operator
/// name, and [`AdapterError::ParameterError`] when a list value is bound to a
/// single-value operator.
pub fn build_where_clause(conditions: &[WhereCondition]) -> Result<WhereClause, AdapterError> {
    if conditions.is_empty() {
        return Ok(WhereClause::default());
    }

    let mut fragments: Vec<String> = Vec::with_capacity(conditions.len());
    let mut params: Vec<RowValue> = Vec::with_capacity(conditions.len());

    for condition in conditions {
        let field = condition.field.as_str();
        let operator = condition.operator.as_deref().unwrap_or("eq");

        match operator {
            "eq" => {
                fragments.push(format!("{field} = ?"));
                params.push(scalar_value(condition, operator)?.clone());
            }
            "ne" => {
                fragments.push(format!("{field} != ?"));
                params.push(scalar_value(condition, operator)?.clone());
            }
            "contains" => {
                fragments.push(format!("{field} LIKE ?"));
                params.push(like_pattern(scalar_value(condition, operator)?, true, true));
            }
            "starts_with" => {
                fragments.push(format!("{field} LIKE ?"));
                params.push(like_pattern(scalar_value(condition, operator)?, false, true));
            }
            "ends_with" => {
                fragments.push(format!("{field} LIKE ?"));
                params.push(like_pattern(scalar_value(condition, operator)?, true, false));
            }
            "lt" | "lte" | "gt" | "gte" => {
                let sql_op = match operator {
                    "lt" => "<",
                    "lte" => "<=",
                    "gt" => ">",
                    _ => ">=",
                };
                fragments.push(format!("{field} {sql_op} ?"));
                params.push(scalar_value(condition, operator)?.clone());
            }
            "in" => {
                // Empty lists and scalars are dropped rather than rejected;
                // existing callers depend on this.
                if let ConditionValue::Many(values) = &condition.value {
                    if !values.is_empty() {
                        let placeholders = vec!["?"; values.len()].join(", ");
                        fragments.push(format!("{field} IN ({placeholders})"));
                        params.extend(values.iter().cloned());
                    }
                }
            }
            other => return Err(AdapterError::UnsupportedOperator(other.to_string())),
        }
    }

    if fragments.is_empty() {
        return Ok(WhereClause::default());
    }

    Ok(WhereClause {
        sql: format!(" WHERE {}", fragments.join(" AND ")),
        params,
    })
}

fn scalar_value<'a>(
    condition: &'a WhereCondition,
    operator: &str,
) -> Result<&'a RowValue, AdapterError> {
    match &condition.value {
        ConditionValue::Single(value) => Ok(value),
        ConditionValue::Many(_) => Err(AdapterError::ParameterError(format!(
            "operator `{operator}` on field `{}` expects a single value, got a list",
            condition.field
        ))),
    }
}

fn like_pattern(value: &RowValue, leading: bool, trailing: bool) -> RowValue {
    let text = pattern_text(value);
    let mut pattern = String::with_capacity(text.len() + 2);
    if leading {
        pattern.push('%');
    }
    pattern.push_str(&text);
    if trailing {
        pattern.push('%');
    }
    RowValue::Text(pattern)
}

fn pattern_text(value: &RowValue) -> String {
    match value {
        RowValue::Text(s) => s.clone(),
        RowValue::Int(i) => i.to_string(),
        RowValue::Float(f) => f.to_string(),
        RowValue::Bool(b) => b.to_string(),
        RowValue::Timestamp(dt) => dt.format("%F %T%.f").to_string(),
        RowValue::Json(v) => v.to_string(),
        RowValue::Blob(bytes) => String::from_utf8_lossy(bytes).into_owned(),
        RowValue::Null => String::new(),
    }
}
