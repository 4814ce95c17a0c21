use std::fmt::Display;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// Partial update called with an empty field map.
    #[error("No data")]
    InvalidUpdateRequest,

    #[error("Minimum employees cannot exceed maximum employees")]
    InvalidRange { min: i32, max: i32 },

    #[error("Duplicate {entity}: {key}")]
    Duplicate { entity: &'static str, key: String },

    #[error("No {entity}: {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("Invalid value for \"{column}\": {reason}")]
    InvalidValue { column: String, reason: String },

    #[error("Database error on {table} during {operation}: {source}")]
    Database {
        table: &'static str,
        operation: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl StoreError {
    pub fn database_operation(
        table: &'static str,
        operation: &'static str,
        source: sqlx::Error,
    ) -> Self {
        Self::Database {
            table,
            operation,
            source,
        }
    }

    pub fn not_found(entity: &'static str, key: impl Display) -> Self {
        Self::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    pub fn invalid_value(column: &str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            column: column.to_string(),
            reason: reason.into(),
        }
    }

    /// True for errors caused by the caller's input rather than the database.
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            Self::InvalidUpdateRequest
                | Self::InvalidRange { .. }
                | Self::Duplicate { .. }
                | Self::InvalidValue { .. }
        )
    }
}
