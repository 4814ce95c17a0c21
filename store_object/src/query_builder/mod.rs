//! Query builder utilities
//!
//! This module provides the SQL fragment builders used by the stores: the
//! partial-update SET builder and the per-entity search filters.

pub mod filter;
pub mod update;


pub use filter::{build_where_clause, CompanyFilter, EquityFilter, JobFilter, Predicate, SqlFilter};
pub use update::{sql_for_partial_update, PartialUpdate};
