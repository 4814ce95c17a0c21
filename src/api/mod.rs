//! HTTP layer
//!
//! warp routes over the company and job stores. Payloads are checked against
//! the JSON Schemas before any store call; mutating routes sit behind the
//! admin guard.

pub mod auth;
pub mod handlers;
pub mod query;
pub mod rejection;
pub mod routes;
pub mod schemas;

pub use rejection::{handle_rejection, ApiError};
pub use routes::routes;
pub use schemas::{SchemaKind, SchemaRegistry};

use std::sync::Arc;
use store_object::{CompanyStore, JobStore};

use crate::core::Jobly;
use crate::errors::JoblyError;

/// Shared state cloned into every route.
#[derive(Debug, Clone)]
pub struct ApiState {
    pub companies: CompanyStore,
    pub jobs: JobStore,
    pub schemas: Arc<SchemaRegistry>,
    pub admin_token: Arc<str>,
}

impl ApiState {
    pub fn new(jobly: &Jobly, admin_token: &str) -> Result<Self, JoblyError> {
        Ok(Self {
            companies: jobly.companies(),
            jobs: jobly.jobs(),
            schemas: Arc::new(SchemaRegistry::new()?),
            admin_token: Arc::from(admin_token),
        })
    }
}
