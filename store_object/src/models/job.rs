use crate::projection::{ColumnKind, ColumnSpec, FieldMapping, Projection};
use crate::traits::TableMetadata;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub static JOB_PROJECTION: Projection = Projection::new(&[
    ColumnSpec::new("id", "id", ColumnKind::Integer),
    ColumnSpec::new("title", "title", ColumnKind::Text),
    ColumnSpec::new("salary", "salary", ColumnKind::Integer),
    ColumnSpec::new("equity", "equity", ColumnKind::Numeric),
    ColumnSpec::new("company_handle", "companyHandle", ColumnKind::Text),
]);

pub static JOB_FIELDS: FieldMapping = FieldMapping::new(&[("companyHandle", "company_handle")]);

/// A job row. `equity` keeps the database's scale and serializes as a
/// string (`"0.010"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: i32,
    pub title: String,
    pub salary: Option<i32>,
    pub equity: Option<Decimal>,
    #[sqlx(rename = "companyHandle")]
    pub company_handle: String,
}

/// Payload for creating a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJob {
    pub title: String,
    #[serde(default)]
    pub salary: Option<i32>,
    #[serde(default)]
    pub equity: Option<Decimal>,
    pub company_handle: String,
}

impl TableMetadata for Job {
    type Id = i32;

    fn entity_name() -> &'static str {
        "job"
    }

    fn table_name() -> &'static str {
        "jobs"
    }

    fn primary_key() -> &'static str {
        "id"
    }

    fn order_by() -> &'static str {
        "id"
    }

    fn projection() -> &'static Projection {
        &JOB_PROJECTION
    }

    fn field_mapping() -> &'static FieldMapping {
        &JOB_FIELDS
    }

    fn immutable_columns() -> &'static [&'static str] {
        &["company_handle"]
    }
}
