//! Trait definitions
//!
//! This module defines the static description of an entity's table.

use crate::projection::{FieldMapping, Projection};
use serde::Serialize;
use sqlx::postgres::PgRow;
use std::fmt::{Debug, Display};

/// Metadata about an entity's table and how its rows are projected.
///
/// ```ignore
/// impl TableMetadata for Company {
///     type Id = String;
///
///     fn entity_name() -> &'static str { "company" }
///     fn table_name() -> &'static str { "companies" }
///     fn primary_key() -> &'static str { "handle" }
///     fn order_by() -> &'static str { "name" }
///     fn projection() -> &'static Projection { &COMPANY_PROJECTION }
///     fn field_mapping() -> &'static FieldMapping { &COMPANY_FIELDS }
/// }
/// ```
pub trait TableMetadata:
    Clone + Send + Sync + Debug + Serialize + Unpin + for<'r> sqlx::FromRow<'r, PgRow>
{
    /// The type used for the primary key
    type Id: Clone
        + Send
        + Sync
        + Debug
        + Display
        + 'static
        + for<'q> sqlx::Encode<'q, sqlx::Postgres>
        + sqlx::Type<sqlx::Postgres>;

    /// Singular name used in error messages
    fn entity_name() -> &'static str;

    /// The table name in the database
    fn table_name() -> &'static str;

    /// Column identifying a single row
    fn primary_key() -> &'static str;

    /// Column list ordering `find_all` results
    fn order_by() -> &'static str;

    /// Columns returned by every read and RETURNING clause
    fn projection() -> &'static Projection;

    /// Public field names that map to differently named columns
    fn field_mapping() -> &'static FieldMapping;

    /// Columns besides the primary key that updates may not touch
    fn immutable_columns() -> &'static [&'static str] {
        &[]
    }

    /// `SELECT <projection> FROM <table>`
    fn select_base_sql() -> String {
        format!(
            "SELECT {} FROM {}",
            Self::projection().select_list(),
            Self::table_name()
        )
    }
}
