//! Query-string coercion
//!
//! Query parameters arrive as strings. Numeric and boolean search keys are
//! converted before schema validation so the schemas can stay strictly typed.

use serde_json::{Map, Value};

pub const COMPANY_INT_KEYS: &[&str] = &["minEmployees", "maxEmployees"];
pub const JOB_INT_KEYS: &[&str] = &["minSalary"];
pub const JOB_BOOL_KEYS: &[&str] = &["hasEquity"];

/// Build a JSON object from query pairs.
///
/// Keys in `int_keys` become integers when they parse, and stay strings
/// otherwise so validation reports them. Non-empty values of `bool_keys` are
/// `true` only for the literal `true` (any case); empty ones stay strings.
/// Later duplicates win.
pub fn coerce_query(
    pairs: Vec<(String, String)>,
    int_keys: &[&str],
    bool_keys: &[&str],
) -> Map<String, Value> {
    let mut out = Map::new();

    for (key, raw) in pairs {
        let value = if int_keys.contains(&key.as_str()) {
            match raw.trim().parse::<i64>() {
                Ok(n) => Value::from(n),
                Err(_) => Value::String(raw),
            }
        } else if bool_keys.contains(&key.as_str()) && !raw.is_empty() {
            Value::Bool(raw.eq_ignore_ascii_case("true"))
        } else {
            Value::String(raw)
        };
        out.insert(key, value);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_company_keys() {
        let q = coerce_query(
            pairs(&[("nameLike", "net"), ("minEmployees", "2"), ("maxEmployees", "x")]),
            COMPANY_INT_KEYS,
            &[],
        );
        assert_eq!(
            Value::Object(q),
            json!({ "nameLike": "net", "minEmployees": 2, "maxEmployees": "x" })
        );
    }

    #[test]
    fn test_has_equity_literal() {
        for (raw, expected) in [("true", true), ("TRUE", true), ("false", false), ("1", false)] {
            let q = coerce_query(pairs(&[("hasEquity", raw)]), JOB_INT_KEYS, JOB_BOOL_KEYS);
            assert_eq!(q["hasEquity"], json!(expected), "raw value {raw}");
        }
    }

    #[test]
    fn test_empty_has_equity_stays_a_string() {
        let q = coerce_query(pairs(&[("hasEquity", "")]), JOB_INT_KEYS, JOB_BOOL_KEYS);
        assert_eq!(q["hasEquity"], json!(""));
    }

    #[test]
    fn test_unknown_keys_pass_through() {
        let q = coerce_query(pairs(&[("nope", "nope")]), JOB_INT_KEYS, JOB_BOOL_KEYS);
        assert_eq!(q["nope"], json!("nope"));
    }
}
