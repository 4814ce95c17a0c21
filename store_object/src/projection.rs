//! Static column tables
//!
//! Each entity declares one [`Projection`] (storage column, public alias and
//! column kind for every column it reads back) and one [`FieldMapping`] (the
//! public names whose storage column differs).

/// Storage type of a column, used to bind untyped JSON values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Integer,
    Numeric,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub column: &'static str,
    pub alias: &'static str,
    pub kind: ColumnKind,
}

impl ColumnSpec {
    pub const fn new(column: &'static str, alias: &'static str, kind: ColumnKind) -> Self {
        Self {
            column,
            alias,
            kind,
        }
    }

    /// Render as a select-list item, aliasing only when the names differ.
    pub fn select_item(&self) -> String {
        if self.column == self.alias {
            self.column.to_string()
        } else {
            format!("{} AS \"{}\"", self.column, self.alias)
        }
    }
}

/// Columns an entity returns, in output order.
#[derive(Debug)]
pub struct Projection {
    columns: &'static [ColumnSpec],
}

impl Projection {
    pub const fn new(columns: &'static [ColumnSpec]) -> Self {
        Self { columns }
    }

    #[cfg(test)]
    pub(crate) fn columns(&self) -> &'static [ColumnSpec] {
        self.columns
    }

    /// `handle, name, num_employees AS "numEmployees", ...`
    pub fn select_list(&self) -> String {
        self.columns
            .iter()
            .map(ColumnSpec::select_item)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn kind_of(&self, column: &str) -> Option<ColumnKind> {
        self.columns
            .iter()
            .find(|spec| spec.column == column)
            .map(|spec| spec.kind)
    }
}

/// Public (camelCase) name to storage column, for names that differ only.
#[derive(Debug)]
pub struct FieldMapping {
    entries: &'static [(&'static str, &'static str)],
}

impl FieldMapping {
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    #[cfg(test)]
    pub(crate) fn entries(&self) -> &'static [(&'static str, &'static str)] {
        self.entries
    }

    /// Storage column for `field`; unmapped names pass through verbatim.
    pub fn resolve<'a>(&self, field: &'a str) -> &'a str {
        self.entries
            .iter()
            .find(|(public, _)| *public == field)
            .map(|(_, column)| *column)
            .unwrap_or(field)
    }
}
