//! # Jobly
//!
//! Companies and jobs over PostgreSQL: typed search filters, partial updates
//! and a warp REST layer on top of the `store-object` stores.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use jobly::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::new(
//!         "localhost".to_string(), 5432, "jobly".to_string(),
//!         "postgres".to_string(), "password".to_string(),
//!         1, 5, 30, 600, 3600,
//!     );
//!
//!     let jobly = Jobly::new(config).await?;
//!     jobly.migrate(false).await?;
//!
//!     let filter = CompanyFilter {
//!         name_like: Some("net".to_string()),
//!         ..Default::default()
//!     };
//!     for company in jobly.companies().find_all(&filter).await? {
//!         println!("{}: {}", company.handle, company.name);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod core;
pub mod errors;
pub mod logger;
pub mod migration;
pub mod prelude;

pub use core::Jobly;
pub use errors::JoblyError;

pub use config::{AppConfig, DatabaseConfig, LoggingConfig, ServerConfig};

pub use store_object;

pub use async_trait;
pub use sqlx;
