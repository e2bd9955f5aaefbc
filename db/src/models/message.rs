use super::Record;
use crate::{Collection, Document, json::chrono_to_bson};
use chrono::{DateTime, Utc};
use mongodb::bson::Bson;

/// The caller's own event time, kept in whatever form it was sent.
#[derive(Debug, Clone, PartialEq)]
pub enum MessageTimestamp {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl From<&MessageTimestamp> for Bson {
    fn from(ts: &MessageTimestamp) -> Self {
        match ts {
            MessageTimestamp::Text(s) => Bson::String(s.clone()),
            MessageTimestamp::Integer(n) => Bson::Int64(*n),
            MessageTimestamp::Float(n) => Bson::Double(*n),
        }
    }
}

/// A loosely-typed attendance event posted by a recognition device.
///
/// `extra` carries every caller field verbatim. The canonical fields are
/// written over it, so a caller can never set the server stamps.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub name: String,
    pub timestamp: MessageTimestamp,
    pub status: String,
    pub saved_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub extra: Document,
}

impl Message {
    pub const DEFAULT_STATUS: &'static str = "Hadir";
}

impl Record for Message {
    const COLLECTION: Collection = Collection::Messages;

    fn to_document(&self) -> Document {
        let mut doc = self.extra.clone();
        doc.insert("name", self.name.clone());
        doc.insert("timestamp", Bson::from(&self.timestamp));
        doc.insert("status", self.status.clone());
        doc.insert("savedAt", chrono_to_bson(self.saved_at));
        doc.insert("lastUpdated", chrono_to_bson(self.last_updated));
        doc.insert("createdAt", chrono_to_bson(self.created_at));
        doc
    }
}
