use crate::errors::StoreError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single search predicate. Filters list the predicates they may contribute
/// in a fixed order; absent ones are `None`.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// `column ILIKE $n`, bound to `%pattern%`
    Contains {
        column: &'static str,
        pattern: String,
    },
    /// `column >= $n`
    AtLeast { column: &'static str, value: Value },
    /// `column <= $n`
    AtMost { column: &'static str, value: Value },
    /// `column > 0`, no parameter
    Positive { column: &'static str },
}

impl Predicate {
    fn render(&self, values: &mut Vec<Value>) -> String {
        match self {
            Predicate::Contains { column, pattern } => {
                values.push(Value::String(format!("%{}%", pattern)));
                format!("{} ILIKE ${}", column, values.len())
            }
            Predicate::AtLeast { column, value } => {
                values.push(value.clone());
                format!("{} >= ${}", column, values.len())
            }
            Predicate::AtMost { column, value } => {
                values.push(value.clone());
                format!("{} <= ${}", column, values.len())
            }
            Predicate::Positive { column } => format!("{} > 0", column),
        }
    }
}

/// Build a WHERE clause from predicates in order. Returns `("", [])` when
/// none are present.
pub fn build_where_clause<I>(predicates: I) -> (String, Vec<Value>)
where
    I: IntoIterator<Item = Option<Predicate>>,
{
    let mut clause = String::new();
    let mut values = Vec::new();

    for predicate in predicates.into_iter().flatten() {
        clause.push_str(if clause.is_empty() { "WHERE " } else { " AND " });
        let term = predicate.render(&mut values);
        clause.push_str(&term);
    }

    (clause, values)
}

/// Typed search filter for one entity.
pub trait SqlFilter {
    /// Candidate predicates in output order.
    fn predicates(&self) -> Vec<Option<Predicate>>;

    fn to_where_clause(&self) -> (String, Vec<Value>) {
        build_where_clause(self.predicates())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CompanyFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_like: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_employees: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_employees: Option<i32>,
}

impl CompanyFilter {
    /// Reject a minimum above the maximum. Runs before any query is built.
    pub fn check_range(&self) -> Result<(), StoreError> {
        match (self.min_employees, self.max_employees) {
            (Some(min), Some(max)) if min > max => Err(StoreError::InvalidRange { min, max }),
            _ => Ok(()),
        }
    }
}

impl SqlFilter for CompanyFilter {
    fn predicates(&self) -> Vec<Option<Predicate>> {
        vec![
            self.name_like.as_ref().map(|name| Predicate::Contains {
                column: "name",
                pattern: name.clone(),
            }),
            self.min_employees.map(|min| Predicate::AtLeast {
                column: "num_employees",
                value: Value::from(min),
            }),
            self.max_employees.map(|max| Predicate::AtMost {
                column: "num_employees",
                value: Value::from(max),
            }),
        ]
    }
}

/// Equity requirement of a job search.
///
/// `NotRequired` is what an explicit `hasEquity: false` means: no restriction,
/// same as leaving the key out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum EquityFilter {
    #[default]
    Any,
    RequireEquity,
    NotRequired,
}

impl From<Option<bool>> for EquityFilter {
    fn from(value: Option<bool>) -> Self {
        match value {
            None => EquityFilter::Any,
            Some(true) => EquityFilter::RequireEquity,
            Some(false) => EquityFilter::NotRequired,
        }
    }
}

impl From<EquityFilter> for Option<bool> {
    fn from(value: EquityFilter) -> Self {
        match value {
            EquityFilter::Any => None,
            EquityFilter::RequireEquity => Some(true),
            EquityFilter::NotRequired => Some(false),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JobFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_salary: Option<i32>,
    #[serde(default)]
    pub has_equity: EquityFilter,
}

impl SqlFilter for JobFilter {
    fn predicates(&self) -> Vec<Option<Predicate>> {
        vec![
            self.title.as_ref().map(|title| Predicate::Contains {
                column: "title",
                pattern: title.clone(),
            }),
            self.min_salary.map(|min| Predicate::AtLeast {
                column: "salary",
                value: Value::from(min),
            }),
            match self.has_equity {
                EquityFilter::RequireEquity => Some(Predicate::Positive { column: "equity" }),
                EquityFilter::Any | EquityFilter::NotRequired => None,
            },
        ]
    }
}
