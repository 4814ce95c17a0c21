//! Store Object - Core database layer for Jobly
//!
//! This crate provides the entity models, the SQL fragment builders used for
//! partial updates and search filters, and the stores that run them against
//! PostgreSQL.

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod errors;
pub mod generic_store;
pub mod models;
pub mod prelude;
pub mod projection;
pub mod query_builder;
pub mod traits;

pub use errors::StoreError;
pub use generic_store::{CompanyStore, GenericStore, JobStore};
pub use models::{Company, Job, NewCompany, NewJob};
pub use projection::{ColumnKind, ColumnSpec, FieldMapping, Projection};
pub use query_builder::{
    sql_for_partial_update, CompanyFilter, EquityFilter, JobFilter, PartialUpdate, Predicate,
    SqlFilter,
};
pub use traits::{StoreObject, TableMetadata};

use sqlx::PgPool;

pub type DbPool = PgPool;
