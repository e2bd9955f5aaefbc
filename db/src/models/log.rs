use super::Record;
use crate::{Collection, Document, json::chrono_to_bson};
use chrono::{DateTime, Utc};
use mongodb::bson::doc;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogType {
    #[default]
    Info,
    Warning,
    Error,
}

impl LogType {
    pub fn as_str(self) -> &'static str {
        match self {
            LogType::Info => "info",
            LogType::Warning => "warning",
            LogType::Error => "error",
        }
    }
}

impl FromStr for LogType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "info" => Ok(LogType::Info),
            "warning" => Ok(LogType::Warning),
            "error" => Ok(LogType::Error),
            other => Err(format!(
                "type must be one of 'info', 'warning', 'error' (got '{other}')"
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Log {
    pub message: String,
    pub kind: LogType,
    pub timestamp: DateTime<Utc>,
}

impl Record for Log {
    const COLLECTION: Collection = Collection::Logs;

    fn to_document(&self) -> Document {
        doc! {
            "message": self.message.as_str(),
            "type": self.kind.as_str(),
            "timestamp": chrono_to_bson(self.timestamp),
        }
    }
}
