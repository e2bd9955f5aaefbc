use super::Record;
use crate::{Collection, Document, json::chrono_to_bson};
use chrono::{DateTime, Utc};
use mongodb::bson::doc;

/// A scheduled class meeting. Start and end times are kept as the
/// wall-clock strings the caller sent (e.g. `"08:00"`).
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub name: String,
    pub date: DateTime<Utc>,
    pub start_time: String,
    pub end_time: String,
    pub created_at: DateTime<Utc>,
}

impl Record for Course {
    const COLLECTION: Collection = Collection::Courses;

    fn to_document(&self) -> Document {
        doc! {
            "name": self.name.as_str(),
            "date": chrono_to_bson(self.date),
            "startTime": self.start_time.as_str(),
            "endTime": self.end_time.as_str(),
            "createdAt": chrono_to_bson(self.created_at),
        }
    }
}
