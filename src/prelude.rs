//! Convenience re-exports for common Jobly usage
//!
//! ```rust
//! use jobly::prelude::*;
//! ```

pub use crate::api::{ApiState, routes};
pub use crate::core::Jobly;
pub use crate::errors::JoblyError;

pub use config::{AppConfig, DatabaseConfig, LoggingConfig, ServerConfig};

pub use store_object::prelude::*;

pub use anyhow;
pub use async_trait;
pub use sqlx;
pub use tokio;
