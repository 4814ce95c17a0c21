//! Traits for database operations
//!
//! This module contains the traits that define the interface for entity
//! stores in jobly.

pub mod core;
pub mod table_metadata;

pub use core::StoreObject;
pub use table_metadata::TableMetadata;
