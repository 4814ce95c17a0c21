//! Parameter binding for untyped JSON values
//!
//! Builders carry their parameters as `serde_json::Value`. Filter parameters
//! are bound by their JSON type; update parameters are bound by the kind of
//! the column they are assigned to, so `null` and decimal strings reach
//! PostgreSQL with the column's own type.

use crate::errors::StoreError;
use crate::projection::ColumnKind;
use rust_decimal::Decimal;
use serde_json::Value;
use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::Postgres;
use std::str::FromStr;

pub(crate) type PgQueryAs<'q, T> = QueryAs<'q, Postgres, T, PgArguments>;

/// Bind by JSON type. Integers that fit are bound as INT4.
pub(crate) fn bind_json_param<'q, T>(query: PgQueryAs<'q, T>, param: Value) -> PgQueryAs<'q, T> {
    match param {
        Value::String(s) => query.bind(s),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                if i >= i32::MIN as i64 && i <= i32::MAX as i64 {
                    query.bind(i as i32)
                } else {
                    query.bind(i)
                }
            } else if let Some(f) = n.as_f64() {
                query.bind(f)
            } else {
                query.bind(n.to_string())
            }
        }
        Value::Bool(b) => query.bind(b),
        Value::Null => query.bind(Option::<String>::None),
        other => query.bind(other.to_string()),
    }
}

/// Bind an update value for `column` by the column's kind.
pub(crate) fn bind_column_param<'q, T>(
    query: PgQueryAs<'q, T>,
    column: &str,
    kind: ColumnKind,
    param: Value,
) -> Result<PgQueryAs<'q, T>, StoreError> {
    match (kind, param) {
        (ColumnKind::Text, Value::Null) => Ok(query.bind(Option::<String>::None)),
        (ColumnKind::Text, Value::String(s)) => Ok(query.bind(s)),
        (ColumnKind::Integer, Value::Null) => Ok(query.bind(Option::<i32>::None)),
        (ColumnKind::Integer, Value::Number(n)) => match n.as_i64().and_then(|i| i32::try_from(i).ok()) {
            Some(i) => Ok(query.bind(i)),
            None => Err(StoreError::invalid_value(
                column,
                format!("{} is not a 32-bit integer", n),
            )),
        },
        (ColumnKind::Numeric, Value::Null) => Ok(query.bind(Option::<Decimal>::None)),
        (ColumnKind::Numeric, Value::Number(n)) => {
            Ok(query.bind(parse_decimal(column, &n.to_string())?))
        }
        (ColumnKind::Numeric, Value::String(s)) => Ok(query.bind(parse_decimal(column, s.trim())?)),
        (kind, other) => Err(StoreError::invalid_value(
            column,
            format!("{} cannot be stored in a {:?} column", other, kind),
        )),
    }
}

fn parse_decimal(column: &str, raw: &str) -> Result<Decimal, StoreError> {
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .map_err(|e| StoreError::invalid_value(column, format!("{:?} is not a decimal: {}", raw, e)))
}
