pub mod binding;
pub mod company;
pub mod core;
pub mod job;
pub mod store_object;

pub use core::GenericStore;

use crate::models::{Company, Job};

pub type CompanyStore = GenericStore<Company>;
pub type JobStore = GenericStore<Job>;
