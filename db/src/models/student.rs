use super::Record;
use crate::{Collection, Document, json::chrono_to_bson};
use chrono::{DateTime, Utc};
use mongodb::bson::{Bson, doc};

/// Full student record with a unique `nim` (student number).
///
/// Uniqueness of `nim` is left to a store index; the application never checks it.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub name: String,
    pub nim: String,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Record for Student {
    const COLLECTION: Collection = Collection::Students;

    fn to_document(&self) -> Document {
        doc! {
            "name": self.name.as_str(),
            "nim": self.nim.as_str(),
            "images": self.images.clone(),
            "createdAt": chrono_to_bson(self.created_at),
        }
    }
}

/// Student produced by a spreadsheet row during bulk import.
///
/// Only the first row of an upload is checked for both columns, so later rows
/// can arrive without a course.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedStudent {
    pub name: Option<String>,
    pub course: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Record for ImportedStudent {
    const COLLECTION: Collection = Collection::Students;

    fn to_document(&self) -> Document {
        let text = |value: &Option<String>| value.clone().map_or(Bson::Null, Bson::String);
        doc! {
            "name": text(&self.name),
            "course": text(&self.course),
            "createdAt": chrono_to_bson(self.created_at),
        }
    }
}
