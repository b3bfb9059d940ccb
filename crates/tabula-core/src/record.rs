use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::Value;

/// Opaque record identity. Two records are the same row iff their ids match.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

/// One row's backing data: an id plus named field values in insertion order.
///
/// Fields are read-only once the record is handed to the grid engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    #[serde(default)]
    pub fields: IndexMap<String, Value>,
}

impl Record {
    /// Create a record with no fields
    pub fn new(id: impl Into<RecordId>) -> Self {
        Self {
            id: id.into(),
            fields: IndexMap::new(),
        }
    }

    /// Builder-style field insertion
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Look up a field by key. Explicit nulls are reported as absent.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key).filter(|v| !v.is_null())
    }

    pub fn has_field(&self, key: &str) -> bool {
        self.field(key).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_field_is_absent() {
        let record = Record::new("a-1")
            .with_field("name", "Eetu")
            .with_field("group", Value::Null);

        assert_eq!(record.field("name"), Some(&Value::Text("Eetu".into())));
        assert!(!record.has_field("group"));
        assert!(!record.has_field("missing"));
    }

    #[test]
    fn test_record_from_json_preserves_field_order() {
        let record: Record = serde_json::from_str(
            r#"{"id": "7", "fields": {"zeta": 1, "alpha": "x", "mid": null}}"#,
        )
        .unwrap();

        assert_eq!(record.id, RecordId::from("7"));
        let keys: Vec<&str> = record.fields.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }
}
