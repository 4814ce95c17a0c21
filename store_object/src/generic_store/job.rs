use super::core::GenericStore;
use crate::errors::StoreError;
use crate::models::{Job, NewJob};
use crate::query_builder::{JobFilter, SqlFilter};
use crate::traits::{StoreObject, TableMetadata};
use async_trait::async_trait;
use serde_json::{Map, Value};

#[async_trait]
impl StoreObject for GenericStore<Job> {
    type Model = Job;
    type NewModel = NewJob;
    type Id = i32;
    type Filter = JobFilter;

    async fn create(&self, data: NewJob) -> Result<Job, StoreError> {
        let sql = format!(
            "INSERT INTO jobs (title, salary, equity, company_handle)
             VALUES ($1, $2, $3, $4)
             RETURNING {}",
            Job::projection().select_list()
        );

        tracing::debug!("[CREATE] Table: jobs, company: {}", data.company_handle);

        sqlx::query_as::<_, Job>(&sql)
            .bind(data.title)
            .bind(data.salary)
            .bind(data.equity)
            .bind(data.company_handle)
            .fetch_one(&self.db_pool)
            .await
            .map_err(|e| StoreError::database_operation(Job::table_name(), "create", e))
    }

    /// No range check here: jobs only have a salary floor.
    async fn find_all(&self, filter: &JobFilter) -> Result<Vec<Job>, StoreError> {
        let (where_clause, params) = filter.to_where_clause();
        self.select_where(&where_clause, params).await
    }

    async fn get(&self, id: &i32) -> Result<Job, StoreError> {
        self.get_by_key(id).await
    }

    async fn update(&self, id: &i32, data: &Map<String, Value>) -> Result<Job, StoreError> {
        self.update_by_key(id, data).await
    }

    async fn remove(&self, id: &i32) -> Result<(), StoreError> {
        self.delete_by_key(id).await
    }
}
