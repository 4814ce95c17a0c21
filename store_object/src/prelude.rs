//! Convenience re-exports for common store-object usage

// Core traits
pub use crate::traits::{StoreObject, TableMetadata};

// Error types
pub use crate::errors::StoreError;

// Stores
pub use crate::generic_store::{CompanyStore, GenericStore, JobStore};

// Models
pub use crate::models::{Company, Job, NewCompany, NewJob};

// Query building
pub use crate::query_builder::{
    sql_for_partial_update, CompanyFilter, EquityFilter, JobFilter, PartialUpdate, SqlFilter,
};

// Common external dependencies that are frequently used
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use sqlx::{FromRow, PgPool, Row};
