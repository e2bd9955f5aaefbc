//! Record Normalizer.
//!
//! Validates an untyped payload for one record kind and fills the server-side
//! fields. Pure: no I/O, and the write time is passed in by the caller so one
//! request stamps every field with the same instant.
//!
//! A field counts as present when the key exists and its value is not `null`,
//! `""`, `false` or `0`.

use crate::ValidationError;
use chrono::{DateTime, NaiveDate, Utc};
use db::json::json_to_bson;
use db::models::{
    Attendance, AttendanceStatus, Course, ImportedStudent, IndividualSchedule, Log, LogType,
    Message, MessageTimestamp, Record, Student,
};
use db::{Collection, Document};
use serde_json::{Map, Value};

pub type Payload = Map<String, Value>;

/// Message fields the server always owns, whatever the caller sent.
const MESSAGE_SERVER_FIELDS: [&str; 4] = ["_id", "savedAt", "lastUpdated", "createdAt"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Attendance,
    Message,
    Student,
    StudentRow,
    Course,
    IndividualSchedule,
    Log,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CanonicalRecord {
    Attendance(Attendance),
    Message(Message),
    Student(Student),
    StudentRow(ImportedStudent),
    Course(Course),
    IndividualSchedule(IndividualSchedule),
    Log(Log),
}

impl CanonicalRecord {
    pub fn collection(&self) -> Collection {
        match self {
            CanonicalRecord::Attendance(_) => Attendance::COLLECTION,
            CanonicalRecord::Message(_) => Message::COLLECTION,
            CanonicalRecord::Student(_) => Student::COLLECTION,
            CanonicalRecord::StudentRow(_) => ImportedStudent::COLLECTION,
            CanonicalRecord::Course(_) => Course::COLLECTION,
            CanonicalRecord::IndividualSchedule(_) => IndividualSchedule::COLLECTION,
            CanonicalRecord::Log(_) => Log::COLLECTION,
        }
    }

    pub fn to_document(&self) -> Document {
        match self {
            CanonicalRecord::Attendance(r) => r.to_document(),
            CanonicalRecord::Message(r) => r.to_document(),
            CanonicalRecord::Student(r) => r.to_document(),
            CanonicalRecord::StudentRow(r) => r.to_document(),
            CanonicalRecord::Course(r) => r.to_document(),
            CanonicalRecord::IndividualSchedule(r) => r.to_document(),
            CanonicalRecord::Log(r) => r.to_document(),
        }
    }
}

/// Validates `payload` as a `kind` record stamped at `now`.
pub fn normalize(
    kind: RecordKind,
    payload: &Value,
    now: DateTime<Utc>,
) -> Result<CanonicalRecord, ValidationError> {
    let object = as_object(payload)?;
    Ok(match kind {
        RecordKind::Attendance => CanonicalRecord::Attendance(attendance(object, now)?),
        RecordKind::Message => CanonicalRecord::Message(message(object, now)?),
        RecordKind::Student => CanonicalRecord::Student(student(object, now)?),
        RecordKind::StudentRow => CanonicalRecord::StudentRow(student_row(object, now)?),
        RecordKind::Course => CanonicalRecord::Course(course(object, now)?),
        RecordKind::IndividualSchedule => {
            CanonicalRecord::IndividualSchedule(individual_schedule(object, now)?)
        }
        RecordKind::Log => CanonicalRecord::Log(log(object, now)?),
    })
}

/// Requires `studentId`, `courseId` and `status`, in that order.
pub fn attendance(payload: &Payload, now: DateTime<Utc>) -> Result<Attendance, ValidationError> {
    let student_id = required_text(payload, "studentId")?;
    let course_id = required_text(payload, "courseId")?;
    let status_raw = required_text(payload, "status")?;
    let status = status_raw
        .parse::<AttendanceStatus>()
        .map_err(|reason| ValidationError::invalid("status", reason))?;

    Ok(Attendance {
        student_id,
        course_id,
        status,
        timestamp: now,
    })
}

/// Requires `name` and `timestamp`; `status` defaults to `Hadir`.
///
/// Every other caller field is carried through untouched, except the server
/// stamps and `_id`, which the caller cannot set.
pub fn message(payload: &Payload, now: DateTime<Utc>) -> Result<Message, ValidationError> {
    let name = required_text(payload, "name")?;
    let timestamp = message_timestamp(required(payload, "timestamp")?)?;
    let status = match payload.get("status").filter(|v| is_present(v)) {
        Some(value) => text(value)
            .ok_or_else(|| ValidationError::invalid("status", "expected a string"))?,
        None => Message::DEFAULT_STATUS.to_string(),
    };

    let mut extra = Document::new();
    for (key, value) in payload {
        if MESSAGE_SERVER_FIELDS.contains(&key.as_str()) {
            continue;
        }
        extra.insert(key.clone(), json_to_bson(value));
    }

    Ok(Message {
        name,
        timestamp,
        status,
        saved_at: now,
        last_updated: now,
        created_at: now,
        extra,
    })
}

pub fn student(payload: &Payload, now: DateTime<Utc>) -> Result<Student, ValidationError> {
    let name = required_text(payload, "name")?;
    let nim = required_text(payload, "nim")?;
    let images = match payload.get("images") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| ValidationError::invalid("images", "expected strings"))
            })
            .collect::<Result<_, _>>()?,
        Some(_) => return Err(ValidationError::invalid("images", "expected an array")),
    };

    Ok(Student {
        name,
        nim,
        images,
        created_at: now,
    })
}

/// Strict form of an import row: both `name` and `course` must be present.
pub fn student_row(
    payload: &Payload,
    now: DateTime<Utc>,
) -> Result<ImportedStudent, ValidationError> {
    let name = required_text(payload, "name")?;
    let course = required_text(payload, "course")?;
    Ok(ImportedStudent {
        name: Some(name),
        course: Some(course),
        created_at: now,
    })
}

/// Lenient form of an import row: missing columns become `None`.
pub fn student_row_lenient(payload: &Payload, now: DateTime<Utc>) -> ImportedStudent {
    ImportedStudent {
        name: optional_text(payload, "name"),
        course: optional_text(payload, "course"),
        created_at: now,
    }
}

pub fn course(payload: &Payload, now: DateTime<Utc>) -> Result<Course, ValidationError> {
    let (name, date, start_time, end_time) = schedule_fields(payload)?;
    Ok(Course {
        name,
        date,
        start_time,
        end_time,
        created_at: now,
    })
}

pub fn individual_schedule(
    payload: &Payload,
    now: DateTime<Utc>,
) -> Result<IndividualSchedule, ValidationError> {
    let (name, date, start_time, end_time) = schedule_fields(payload)?;
    Ok(IndividualSchedule {
        name,
        date,
        start_time,
        end_time,
        created_at: now,
    })
}

pub fn log(payload: &Payload, now: DateTime<Utc>) -> Result<Log, ValidationError> {
    let message = required_text(payload, "message")?;
    let kind = match optional_text(payload, "type") {
        Some(raw) => raw
            .parse::<LogType>()
            .map_err(|reason| ValidationError::invalid("type", reason))?,
        None => LogType::default(),
    };
    Ok(Log {
        message,
        kind,
        timestamp: now,
    })
}

fn schedule_fields(
    payload: &Payload,
) -> Result<(String, DateTime<Utc>, String, String), ValidationError> {
    let name = required_text(payload, "name")?;
    let date = parse_date("date", &required_text(payload, "date")?)?;
    let start_time = required_text(payload, "startTime")?;
    let end_time = required_text(payload, "endTime")?;
    Ok((name, date, start_time, end_time))
}

fn as_object(payload: &Value) -> Result<&Payload, ValidationError> {
    payload
        .as_object()
        .ok_or_else(|| ValidationError::invalid("body", "expected a JSON object"))
}

/// JavaScript-style truthiness, which is what the devices and dashboard rely on.
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn required<'a>(payload: &'a Payload, field: &'static str) -> Result<&'a Value, ValidationError> {
    payload
        .get(field)
        .filter(|v| is_present(v))
        .ok_or(ValidationError::MissingField(field))
}

fn required_text(payload: &Payload, field: &'static str) -> Result<String, ValidationError> {
    let value = required(payload, field)?;
    text(value).ok_or_else(|| ValidationError::invalid(field, "expected a string"))
}

fn optional_text(payload: &Payload, field: &str) -> Option<String> {
    payload
        .get(field)
        .and_then(text)
        .filter(|s| !s.is_empty())
}

/// Strings as-is; numbers in their shortest form (`101.0` becomes `"101"`).
pub fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => {
                format!("{}", f as i64)
            }
            _ => n.to_string(),
        }),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn message_timestamp(value: &Value) -> Result<MessageTimestamp, ValidationError> {
    match value {
        Value::String(s) => Ok(MessageTimestamp::Text(s.clone())),
        Value::Number(n) => Ok(match n.as_i64() {
            Some(i) => MessageTimestamp::Integer(i),
            None => MessageTimestamp::Float(n.as_f64().unwrap_or_default()),
        }),
        _ => Err(ValidationError::invalid(
            "timestamp",
            "expected a string or a number",
        )),
    }
}

fn parse_date(field: &'static str, raw: &str) -> Result<DateTime<Utc>, ValidationError> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| ValidationError::invalid(field, "expected RFC 3339 or YYYY-MM-DD"))
}
