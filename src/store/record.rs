//! # Record Model
//!
//! A record is a schema-flexible field map. Every record carries a unique
//! integer `id` and a numeric `sortIndex` used as the default ordering key;
//! all other fields are opaque to the engine.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field holding the unique record identifier
pub const ID_FIELD: &str = "id";

/// Field holding the default ordering key
pub const SORT_INDEX_FIELD: &str = "sortIndex";

/// A single record: an open field map over JSON values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    /// Create a record from raw fields
    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Get a field value, if present
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// The record's unique id, if it carries one
    pub fn id(&self) -> Option<i64> {
        self.fields.get(ID_FIELD).and_then(Value::as_i64)
    }

    /// Assign the record's id, replacing any client-supplied value
    pub fn set_id(&mut self, id: i64) {
        self.fields.insert(ID_FIELD.to_string(), Value::from(id));
    }

    /// The record's default ordering key, if present and numeric
    pub fn sort_index(&self) -> Option<f64> {
        self.fields.get(SORT_INDEX_FIELD).and_then(Value::as_f64)
    }

    /// Merge partial fields onto this record, overwriting existing values
    pub fn merge(&mut self, partial: &Map<String, Value>) {
        for (key, value) in partial {
            self.fields.insert(key.clone(), value.clone());
        }
    }

    /// Borrow the underlying field map
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Self::from_fields(fields)
    }
}
