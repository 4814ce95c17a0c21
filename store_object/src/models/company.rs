use crate::projection::{ColumnKind, ColumnSpec, FieldMapping, Projection};
use crate::traits::TableMetadata;
use serde::{Deserialize, Serialize};

pub static COMPANY_PROJECTION: Projection = Projection::new(&[
    ColumnSpec::new("handle", "handle", ColumnKind::Text),
    ColumnSpec::new("name", "name", ColumnKind::Text),
    ColumnSpec::new("description", "description", ColumnKind::Text),
    ColumnSpec::new("num_employees", "numEmployees", ColumnKind::Integer),
    ColumnSpec::new("logo_url", "logoUrl", ColumnKind::Text),
]);

pub static COMPANY_FIELDS: FieldMapping =
    FieldMapping::new(&[("numEmployees", "num_employees"), ("logoUrl", "logo_url")]);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub handle: String,
    pub name: String,
    pub description: String,
    #[sqlx(rename = "numEmployees")]
    pub num_employees: Option<i32>,
    #[sqlx(rename = "logoUrl")]
    pub logo_url: Option<String>,
}

/// Payload for creating a company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCompany {
    pub handle: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub num_employees: Option<i32>,
    #[serde(default)]
    pub logo_url: Option<String>,
}

impl TableMetadata for Company {
    type Id = String;

    fn entity_name() -> &'static str {
        "company"
    }

    fn table_name() -> &'static str {
        "companies"
    }

    fn primary_key() -> &'static str {
        "handle"
    }

    fn order_by() -> &'static str {
        "name"
    }

    fn projection() -> &'static Projection {
        &COMPANY_PROJECTION
    }

    fn field_mapping() -> &'static FieldMapping {
        &COMPANY_FIELDS
    }
}
