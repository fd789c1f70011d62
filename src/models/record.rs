use serde::Serialize;
use serde_json::{Map, Value};

use crate::utils::normalize::normalize_key;

pub const FIELD_ID: &str = "id";

/// One entity from the legacy document.
///
/// `fields` holds the whole JSON object, `id` included, in its original key
/// order. Nothing besides `id` is interpreted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ServiceRecord {
    #[serde(skip)]
    pub id: String,
    pub fields: Map<String, Value>,
}

impl ServiceRecord {
    /// Wraps a JSON value, returning `None` unless it is an object with a string `id`.
    pub fn from_value(value: Value) -> Option<Self> {
        let Value::Object(fields) = value else {
            return None;
        };
        let id = fields.get(FIELD_ID)?.as_str()?.to_string();
        Some(Self { id, fields })
    }

    pub fn key(&self) -> String {
        normalize_key(&self.id)
    }
}

/// Returns the first record, in legacy order, whose id normalizes to `key`.
pub fn resolve_record<'a>(records: &'a [ServiceRecord], key: &str) -> Option<&'a ServiceRecord> {
    records.iter().find(|record| record.key() == key)
}
