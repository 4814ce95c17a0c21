//! Entity models
//!
//! Row types read back from the database, the payloads used to create them,
//! and their table metadata.

pub mod company;
pub mod job;

pub use company::{Company, NewCompany, COMPANY_FIELDS, COMPANY_PROJECTION};
pub use job::{Job, NewJob, JOB_FIELDS, JOB_PROJECTION};
