use super::Record;
use crate::{Collection, Document, json::chrono_to_bson};
use chrono::{DateTime, Utc};
use mongodb::bson::doc;
use std::fmt;
use std::str::FromStr;

/// Presence state recorded for one student in one course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    /// The stored spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            AttendanceStatus::Present => "hadir",
            AttendanceStatus::Absent => "tidak hadir",
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttendanceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hadir" | "present" => Ok(AttendanceStatus::Present),
            "tidak hadir" | "absent" => Ok(AttendanceStatus::Absent),
            other => Err(format!(
                "status must be one of 'hadir', 'tidak hadir' (got '{other}')"
            )),
        }
    }
}

/// Attendance event. `student_id` and `course_id` are plain references;
/// nothing checks that they point at existing documents.
#[derive(Debug, Clone, PartialEq)]
pub struct Attendance {
    pub student_id: String,
    pub course_id: String,
    pub status: AttendanceStatus,
    pub timestamp: DateTime<Utc>,
}

impl Record for Attendance {
    const COLLECTION: Collection = Collection::Attendance;

    fn to_document(&self) -> Document {
        doc! {
            "studentId": self.student_id.as_str(),
            "courseId": self.course_id.as_str(),
            "status": self.status.as_str(),
            "timestamp": chrono_to_bson(self.timestamp),
        }
    }
}
