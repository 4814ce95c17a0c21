//! Generic store implementations
//!
//! Read, partial update and delete are identical for every entity and live
//! here; `create` and `find_all` differ per entity and are implemented in the
//! entity modules on top of these helpers.

use super::binding::{bind_column_param, bind_json_param};
use super::core::GenericStore;
use crate::errors::StoreError;
use crate::query_builder::sql_for_partial_update;
use crate::traits::TableMetadata;
use serde_json::{Map, Value};

impl<T: TableMetadata> GenericStore<T> {
    /// `SELECT ... [WHERE ...] ORDER BY ...` with already-built filter parts.
    pub(crate) async fn select_where(
        &self,
        where_clause: &str,
        params: Vec<Value>,
    ) -> Result<Vec<T>, StoreError> {
        let base_sql = T::select_base_sql();
        let order_by = T::order_by();
        let mut full_sql =
            String::with_capacity(base_sql.len() + where_clause.len() + order_by.len() + 11);
        full_sql.push_str(&base_sql);
        if !where_clause.is_empty() {
            full_sql.push(' ');
            full_sql.push_str(where_clause);
        }
        full_sql.push_str(" ORDER BY ");
        full_sql.push_str(order_by);

        tracing::debug!("[FIND_ALL] Table: {}", T::table_name());
        tracing::debug!("[FIND_ALL] SQL: {}", full_sql);
        crate::trace_log!("[FIND_ALL] Params: {:?}", params);

        let mut sqlx_query = sqlx::query_as::<_, T>(&full_sql);
        for param in params {
            sqlx_query = bind_json_param(sqlx_query, param);
        }

        sqlx_query
            .fetch_all(&self.db_pool)
            .await
            .map_err(|e| StoreError::database_operation(T::table_name(), "find_all", e))
    }

    pub(crate) async fn get_by_key(&self, key: &T::Id) -> Result<T, StoreError> {
        let sql = format!("{} WHERE {} = $1", T::select_base_sql(), T::primary_key());

        let record = sqlx::query_as::<_, T>(&sql)
            .bind(key.clone())
            .fetch_optional(&self.db_pool)
            .await
            .map_err(|e| StoreError::database_operation(T::table_name(), "get", e))?;

        record.ok_or_else(|| StoreError::not_found(T::entity_name(), key))
    }

    pub(crate) async fn update_by_key(
        &self,
        key: &T::Id,
        data: &Map<String, Value>,
    ) -> Result<T, StoreError> {
        let update = sql_for_partial_update(data, T::field_mapping())?;

        let projection = T::projection();
        let mut kinds = Vec::with_capacity(update.columns.len());
        for column in &update.columns {
            let column = column.as_str();
            if column == T::primary_key() || T::immutable_columns().contains(&column) {
                return Err(StoreError::invalid_value(column, "column cannot be updated"));
            }
            match projection.kind_of(column) {
                Some(kind) => kinds.push(kind),
                None => return Err(StoreError::invalid_value(column, "unknown column")),
            }
        }

        let sql = format!(
            "UPDATE {} SET {} WHERE {} = ${} RETURNING {}",
            T::table_name(),
            update.set_cols,
            T::primary_key(),
            update.next_placeholder(),
            T::projection().select_list()
        );

        tracing::debug!("[UPDATE] Table: {}", T::table_name());
        tracing::debug!("[UPDATE] SQL: {}", sql);
        crate::debug_log!("[UPDATE] Fields count: {}", update.values.len());

        let mut sqlx_query = sqlx::query_as::<_, T>(&sql);
        for ((column, kind), value) in update.columns.iter().zip(kinds).zip(update.values) {
            sqlx_query = bind_column_param(sqlx_query, column, kind, value)?;
        }

        let record = sqlx_query
            .bind(key.clone())
            .fetch_optional(&self.db_pool)
            .await
            .map_err(|e| StoreError::database_operation(T::table_name(), "update", e))?;

        record.ok_or_else(|| StoreError::not_found(T::entity_name(), key))
    }

    pub(crate) async fn delete_by_key(&self, key: &T::Id) -> Result<(), StoreError> {
        let sql = format!(
            "DELETE FROM {} WHERE {} = $1",
            T::table_name(),
            T::primary_key()
        );

        let result = sqlx::query(&sql)
            .bind(key.clone())
            .execute(&self.db_pool)
            .await
            .map_err(|e| StoreError::database_operation(T::table_name(), "remove", e))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found(T::entity_name(), key));
        }

        Ok(())
    }
}
