//! Core Jobly functionality
//!
//! This module contains the main Jobly struct, which owns the connection pool
//! and hands out the entity stores.

use sqlx::PgPool;
use std::time::Duration;
use store_object::{CompanyStore, JobStore};

use crate::errors::JoblyError;
use config::DatabaseConfig;

/// Main Jobly coordinator that manages the database connection and stores
#[derive(Debug, Clone)]
pub struct Jobly {
    pool: PgPool,
}

impl Jobly {
    /// Create new Jobly with database connection
    pub async fn new(config: DatabaseConfig) -> Result<Self, JoblyError> {
        let connection_string = config.connection_string();

        let mut pool_options = sqlx::postgres::PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds));

        // Set max lifetime if specified
        if config.max_lifetime_seconds > 0 {
            pool_options =
                pool_options.max_lifetime(Duration::from_secs(config.max_lifetime_seconds));
        }

        let pool = pool_options.connect(&connection_string).await?;

        tracing::info!(
            "Connected to {}:{}/{}",
            config.host,
            config.port,
            config.database
        );

        Ok(Self { pool })
    }

    /// Wrap an existing pool
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get database pool reference
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Store for the `companies` table
    pub fn companies(&self) -> CompanyStore {
        CompanyStore::new(self.pool.clone())
    }

    /// Store for the `jobs` table
    pub fn jobs(&self) -> JobStore {
        JobStore::new(self.pool.clone())
    }

    /// Check database connection health
    pub async fn health_check(&self) -> Result<(), JoblyError> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }
}
