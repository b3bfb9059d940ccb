use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single field value held by a [`Record`](crate::Record).
///
/// Deserialization is untagged so JSON mock data maps directly: `null`,
/// booleans, integers, floats, ISO `YYYY-MM-DD` strings (as [`Value::Date`]),
/// and any other string (as [`Value::Text`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum Value {
    /// Absent or explicitly empty value
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    /// Calendar date without time zone
    Date(NaiveDate),
    Text(String),
}

impl Value {
    /// Check if the value is NULL
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Try to get as a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as i64
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(v) => Some(*v),
            Value::Text(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        }
    }

    /// Try to get as f64.
    ///
    /// Text is parsed leniently: surrounding whitespace is ignored and a
    /// decimal comma is accepted (`"12,50"`).
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            Value::Text(s) => parse_number(s),
            _ => None,
        }
    }

    /// Try to get as bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as a date. Text in `YYYY-MM-DD` or `DD.MM.YYYY` form is parsed.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Value::Date(d) => Some(*d),
            Value::Text(s) => parse_date(s),
            _ => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(v) => write!(f, "{}", v),
            Value::Integer(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Date(v) => write!(f, "{}", v),
            Value::Text(v) => write!(f, "{}", v),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

fn parse_number(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(n) = trimmed.parse::<f64>() {
        return Some(n);
    }
    // Decimal comma, as typed in the admin console ("12,50")
    if trimmed.matches(',').count() == 1 && !trimmed.contains('.') {
        return trimmed.replace(',', ".").parse::<f64>().ok();
    }
    None
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    let trimmed = s.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%d.%m.%Y"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged_deserialization() {
        let values: Vec<Value> =
            serde_json::from_str(r#"[null, true, 42, 2.5, "2024-03-01", "Maija"]"#).unwrap();

        assert_eq!(
            values,
            vec![
                Value::Null,
                Value::Bool(true),
                Value::Integer(42),
                Value::Float(2.5),
                Value::Date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()),
                Value::Text("Maija".to_string()),
            ]
        );
    }

    #[test]
    fn test_numeric_text_parsing() {
        assert_eq!(Value::from("12,50").as_f64(), Some(12.5));
        assert_eq!(Value::from(" 7 ").as_i64(), Some(7));
        assert_eq!(Value::from("1,2,3").as_f64(), None);
        assert_eq!(Value::from("").as_f64(), None);
    }

    #[test]
    fn test_date_text_parsing() {
        let expected = NaiveDate::from_ymd_opt(2023, 8, 14);
        assert_eq!(Value::from("2023-08-14").as_date(), expected);
        assert_eq!(Value::from("14.08.2023").as_date(), expected);
        assert_eq!(Value::from("yesterday").as_date(), None);
    }

    #[test]
    fn test_null_displays_empty() {
        assert_eq!(Value::Null.to_string(), "");
        assert_eq!(Value::from(None::<i64>), Value::Null);
    }
}
