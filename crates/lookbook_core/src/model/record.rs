//! Raw records as returned by the tabular store.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One unprocessed row: opaque record id plus the raw field map.
///
/// Fields may be absent, null, or of an unexpected JSON type. Normalization
/// is responsible for tolerating all of that.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub id: String,
    #[serde(default, deserialize_with = "fields_or_empty")]
    pub fields: Map<String, Value>,
}

/// Accepts any JSON for `fields`; only an object is kept.
fn fields_or_empty<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Object(map) => map,
        _ => Map::new(),
    })
}

impl RawRecord {
    /// Builds a record from an id and a JSON object of fields.
    ///
    /// Non-object values produce an empty field map.
    pub fn new(id: impl Into<String>, fields: Value) -> Self {
        let fields = match fields {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self {
            id: id.into(),
            fields,
        }
    }

    /// Returns one raw field, treating JSON `null` as absent.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name).filter(|value| !value.is_null())
    }
}

/// List response envelope: `{ "records": [...] }`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordPage {
    pub records: Vec<RawRecord>,
}
