//! Database migration functionality
//!
//! This module creates the `companies` and `jobs` tables.

use crate::core::Jobly;
use crate::errors::JoblyError;

const CREATE_COMPANIES_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS companies (
    handle VARCHAR(25) PRIMARY KEY CHECK (handle = lower(handle)),
    name TEXT UNIQUE NOT NULL,
    num_employees INTEGER CHECK (num_employees >= 0),
    description TEXT NOT NULL,
    logo_url TEXT
)"#;

const CREATE_JOBS_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS jobs (
    id SERIAL PRIMARY KEY,
    title TEXT NOT NULL,
    salary INTEGER CHECK (salary >= 0),
    equity NUMERIC CHECK (equity <= 1.0),
    company_handle VARCHAR(25) NOT NULL
        REFERENCES companies ON DELETE CASCADE
)"#;

const DROP_TABLES_SQL: [&str; 2] = ["DROP TABLE IF EXISTS jobs", "DROP TABLE IF EXISTS companies"];

impl Jobly {
    /// Create the tables if they do not exist.
    /// If recreate is true, drops existing tables first
    pub async fn migrate(&self, recreate: bool) -> Result<(), JoblyError> {
        if recreate {
            for drop_sql in DROP_TABLES_SQL {
                tracing::info!("Dropping table with SQL: {}", drop_sql);
                sqlx::query(drop_sql).execute(self.pool()).await?;
            }
        }

        for create_sql in [CREATE_COMPANIES_SQL, CREATE_JOBS_SQL] {
            tracing::debug!("Creating table with SQL: {}", create_sql);
            sqlx::query(create_sql).execute(self.pool()).await?;
        }

        tracing::info!("Schema ready: companies, jobs");
        Ok(())
    }
}
