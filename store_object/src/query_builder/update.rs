use crate::errors::StoreError;
use crate::projection::FieldMapping;
use serde_json::{Map, Value};

/// SET fragment produced from a sparse field map.
///
/// `values[i]` belongs to placeholder `$i+1` and to storage column `columns[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct PartialUpdate {
    pub set_cols: String,
    pub values: Vec<Value>,
    pub columns: Vec<String>,
}

impl PartialUpdate {
    /// Placeholder number for the identifying clause the caller appends.
    pub fn next_placeholder(&self) -> usize {
        self.values.len() + 1
    }
}

/// Build `"col_a"=$1, "col_b"=$2, ...` for the given fields, in the map's
/// insertion order.
///
/// Field names are resolved through `mapping`; names without an entry are
/// used as the column name unchanged. Values are carried over as-is.
///
/// ```
/// use serde_json::{json, Map};
/// use store_object::{sql_for_partial_update, FieldMapping};
///
/// static MAPPING: FieldMapping = FieldMapping::new(&[("firstName", "first_name")]);
///
/// let mut data = Map::new();
/// data.insert("firstName".into(), json!("Aliya"));
/// data.insert("age".into(), json!(32));
///
/// let update = sql_for_partial_update(&data, &MAPPING).unwrap();
/// assert_eq!(update.set_cols, r#""first_name"=$1, "age"=$2"#);
/// assert_eq!(update.values, vec![json!("Aliya"), json!(32)]);
/// ```
pub fn sql_for_partial_update(
    data: &Map<String, Value>,
    mapping: &FieldMapping,
) -> Result<PartialUpdate, StoreError> {
    if data.is_empty() {
        return Err(StoreError::InvalidUpdateRequest);
    }

    let mut clauses = Vec::with_capacity(data.len());
    let mut values = Vec::with_capacity(data.len());
    let mut columns = Vec::with_capacity(data.len());

    for (idx, (field, value)) in data.iter().enumerate() {
        let column = mapping.resolve(field);
        clauses.push(format!("\"{}\"=${}", column, idx + 1));
        columns.push(column.to_string());
        values.push(value.clone());
    }

    Ok(PartialUpdate {
        set_cols: clauses.join(", "),
        values,
        columns,
    })
}
