use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

pub const UPLOAD_DATE_KEY: &str = "UploadDate";

/// One OCR capture as persisted by the detection stage.
///
/// On the wire a reading is a flat object: `UploadDate` holds the capture
/// instant, every other key is a detected text slot (`Text_0`, `Text_1`, ...)
/// or auxiliary metadata such as `Image`. Keys carry no ordering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Reading {
    pub upload_timestamp: Option<String>,
    pub fragments: BTreeMap<String, String>,
}

impl Reading {
    pub fn new<T: Into<String>>(upload_timestamp: Option<T>) -> Self {
        Self {
            upload_timestamp: upload_timestamp.map(Into::into),
            fragments: BTreeMap::new(),
        }
    }

    pub fn with_fragment<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.fragments.insert(key.into(), value.into());
        self
    }
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

impl From<Map<String, Value>> for Reading {
    fn from(record: Map<String, Value>) -> Self {
        let mut reading = Reading::default();
        for (key, value) in record {
            if key == UPLOAD_DATE_KEY {
                reading.upload_timestamp = scalar_text(value);
                continue;
            }
            if let Some(text) = scalar_text(value) {
                reading.fragments.insert(key, text);
            }
        }
        reading
    }
}

impl From<Reading> for Map<String, Value> {
    fn from(reading: Reading) -> Self {
        let mut record = Map::new();
        if let Some(ts) = reading.upload_timestamp {
            record.insert(UPLOAD_DATE_KEY.to_string(), Value::String(ts));
        }
        for (key, value) in reading.fragments {
            record.insert(key, Value::String(value));
        }
        record
    }
}
