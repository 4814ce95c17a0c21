//! Trait definitions
//!
//! This module defines core traits for database operations.

use crate::StoreError;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt::Debug;

/// Create, read, update and delete operations of one entity kind.
///
/// Every method runs a single query, except `create` for companies, which
/// checks for a duplicate handle first.
#[async_trait]
pub trait StoreObject: Clone + Send + Sync + Debug {
    /// The row type returned by every operation
    type Model: Clone + Send + Sync + Debug + Serialize;

    /// Payload accepted by `create`
    type NewModel: Send + Sync + Debug + DeserializeOwned;

    /// Primary key type
    type Id: Clone + Send + Sync + Debug;

    /// Typed search filter accepted by `find_all`
    type Filter: Send + Sync + Debug + Default + DeserializeOwned;

    /// Insert a new row and return it
    async fn create(&self, data: Self::NewModel) -> Result<Self::Model, StoreError>;

    /// List rows matching `filter` in the entity's natural order
    async fn find_all(&self, filter: &Self::Filter) -> Result<Vec<Self::Model>, StoreError>;

    /// Get one row, or `StoreError::NotFound`
    async fn get(&self, id: &Self::Id) -> Result<Self::Model, StoreError>;

    /// Change only the fields present in `data`
    ///
    /// Keys are public field names. An empty map fails with
    /// `StoreError::InvalidUpdateRequest` without touching the database.
    async fn update(
        &self,
        id: &Self::Id,
        data: &Map<String, Value>,
    ) -> Result<Self::Model, StoreError>;

    /// Delete one row, or `StoreError::NotFound`
    async fn remove(&self, id: &Self::Id) -> Result<(), StoreError>;
}
