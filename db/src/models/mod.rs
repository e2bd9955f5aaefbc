//! Record shapes for every entity kept in the document store.
//!
//! Each model knows its collection and how to lay itself out as a stored
//! document. Field names in the store are camelCase.

pub mod attendance;
pub mod course;
pub mod individual_schedule;
pub mod log;
pub mod message;
pub mod student;

use crate::{Collection, Document};

pub use attendance::{Attendance, AttendanceStatus};
pub use course::Course;
pub use individual_schedule::IndividualSchedule;
pub use log::{Log, LogType};
pub use message::{Message, MessageTimestamp};
pub use student::{ImportedStudent, Student};

/// A canonical record that can be written to the store.
pub trait Record {
    const COLLECTION: Collection;

    fn to_document(&self) -> Document;
}
