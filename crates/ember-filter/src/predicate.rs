//! Leaf filter predicates

use serde::{Deserialize, Serialize};

/// A test applied to a single record.
///
/// Record cells are [`toml::Value`]s, matching the dynamic values used
/// throughout the editor's data model. Column lookup is by header name; a
/// predicate that names a column the record does not have rejects the row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Predicate {
    /// Accepts every record.
    Any,
    /// Cell in `column` equals `value` exactly.
    ColumnEquals { column: String, value: toml::Value },
    /// Cell in `column` is a string containing `needle`. Non-string cells
    /// never match.
    ColumnContains { column: String, needle: String },
}

impl Predicate {
    /// Apply the predicate to one record.
    pub fn accept(&self, headers: &[String], row: &[toml::Value]) -> bool {
        match self {
            Predicate::Any => true,
            Predicate::ColumnEquals { column, value } => {
                match lookup(headers, row, column) {
                    Some(cell) => cell == value,
                    None => false,
                }
            }
            Predicate::ColumnContains { column, needle } => {
                match lookup(headers, row, column) {
                    Some(toml::Value::String(s)) => s.contains(needle.as_str()),
                    _ => false,
                }
            }
        }
    }
}

fn lookup<'a>(headers: &[String], row: &'a [toml::Value], column: &str) -> Option<&'a toml::Value> {
    let index = headers.iter().position(|h| h == column)?;
    row.get(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers() -> Vec<String> {
        vec!["id".to_string(), "name".to_string(), "value".to_string()]
    }

    fn row() -> Vec<toml::Value> {
        vec![
            toml::Value::String("iron_sword".into()),
            toml::Value::String("Iron Sword".into()),
            toml::Value::Integer(35),
        ]
    }

    #[test]
    fn any_accepts() {
        assert!(Predicate::Any.accept(&headers(), &row()));
    }

    #[test]
    fn equals_matches_cell() {
        let p = Predicate::ColumnEquals {
            column: "value".into(),
            value: toml::Value::Integer(35),
        };
        assert!(p.accept(&headers(), &row()));

        let p = Predicate::ColumnEquals {
            column: "value".into(),
            value: toml::Value::Integer(36),
        };
        assert!(!p.accept(&headers(), &row()));
    }

    #[test]
    fn contains_matches_substring() {
        let p = Predicate::ColumnContains {
            column: "name".into(),
            needle: "Sword".into(),
        };
        assert!(p.accept(&headers(), &row()));
    }

    #[test]
    fn contains_rejects_non_string_cell() {
        let p = Predicate::ColumnContains {
            column: "value".into(),
            needle: "3".into(),
        };
        assert!(!p.accept(&headers(), &row()));
    }

    #[test]
    fn missing_column_rejects() {
        let p = Predicate::ColumnEquals {
            column: "weight".into(),
            value: toml::Value::Integer(1),
        };
        assert!(!p.accept(&headers(), &row()));
    }
}
