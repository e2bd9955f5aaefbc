use super::Record;
use crate::{Collection, Document, json::chrono_to_bson};
use chrono::{DateTime, Utc};
use mongodb::bson::doc;

/// Per-person schedule window, same shape as a course meeting.
#[derive(Debug, Clone, PartialEq)]
pub struct IndividualSchedule {
    pub name: String,
    pub date: DateTime<Utc>,
    pub start_time: String,
    pub end_time: String,
    pub created_at: DateTime<Utc>,
}

impl Record for IndividualSchedule {
    const COLLECTION: Collection = Collection::IndividualSchedules;

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
