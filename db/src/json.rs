//! JSON view of stored documents.
//!
//! HTTP responses render documents the way a JavaScript client expects them:
//! `ObjectId` as its hex string and dates as RFC 3339 strings with
//! millisecond precision. Everything else maps to the obvious JSON value.

use chrono::{DateTime, SecondsFormat, Utc};
use mongodb::bson::{self, Bson, Document};
use serde_json::{Map, Number, Value};

pub fn document_to_json(document: &Document) -> Value {
    let mut object = Map::with_capacity(document.len());
    for (key, value) in document {
        object.insert(key.clone(), bson_to_json(value));
    }
    Value::Object(object)
}

pub fn documents_to_json(documents: &[Document]) -> Value {
    Value::Array(documents.iter().map(document_to_json).collect())
}

pub fn bson_to_json(value: &Bson) -> Value {
    match value {
        Bson::Null | Bson::Undefined => Value::Null,
        Bson::Boolean(b) => Value::Bool(*b),
        Bson::Int32(n) => Value::from(*n),
        Bson::Int64(n) => Value::from(*n),
        Bson::Double(n) => Number::from_f64(*n).map_or(Value::Null, Value::Number),
        Bson::String(s) => Value::String(s.clone()),
        Bson::ObjectId(id) => Value::String(id.to_hex()),
        Bson::DateTime(dt) => Value::String(date_to_rfc3339(*dt)),
        Bson::Array(items) => Value::Array(items.iter().map(bson_to_json).collect()),
        Bson::Document(doc) => document_to_json(doc),
        other => other.clone().into_relaxed_extjson(),
    }
}

/// Converts a caller-supplied JSON value into its BSON form for storage.
///
/// Integers that fit `i64` stay integers. Larger ones are stored as doubles,
/// the way a JavaScript client would have sent them.
pub fn json_to_bson(value: &Value) -> Bson {
    match value {
        Value::Null => Bson::Null,
        Value::Bool(b) => Bson::Boolean(*b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => Bson::Int64(i),
            None => Bson::Double(n.as_f64().unwrap_or(f64::NAN)),
        },
        Value::String(s) => Bson::String(s.clone()),
        Value::Array(items) => Bson::Array(items.iter().map(json_to_bson).collect()),
        Value::Object(object) => {
            let mut document = Document::new();
            for (key, item) in object {
                document.insert(key.clone(), json_to_bson(item));
            }
            Bson::Document(document)
        }
    }
}

pub fn date_to_rfc3339(dt: bson::DateTime) -> String {
    DateTime::<Utc>::from_timestamp_millis(dt.timestamp_millis())
        .map(|ts| ts.to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_else(|| dt.timestamp_millis().to_string())
}

pub fn chrono_to_bson(ts: DateTime<Utc>) -> bson::DateTime {
    bson::DateTime::from_millis(ts.timestamp_millis())
}
