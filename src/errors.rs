//! Error types for the Jobly crate
//!
//! This module contains the error types returned by the coordinator and the
//! server setup.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum JoblyError {
    #[error("Database connection error: {0}")]
    DatabaseConnection(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Store error: {0}")]
    Store(#[from] store_object::StoreError),

    #[error("Invalid server address: {0}")]
    InvalidAddress(String),

    #[error("Schema error: {0}")]
    Schema(String),
}
