use db::InsertResult;
use db::json::bson_to_json;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// Standard JSON envelope for handler responses.
///
/// ```json
/// {
///   "status": "success",
///   "data": [ ... ],
///   "message": "Data berhasil disimpan",
///   "count": 2
/// }
/// ```
///
/// `data`, `message` and `count` are left out when unset. Error responses
/// always carry `message`:
///
/// ```json
/// { "status": "error", "message": "Method tidak diizinkan" }
/// ```
#[derive(Debug, Serialize)]
pub struct ApiResponse<T>
where
    T: Serialize,
{
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    pub fn success(data: T) -> Self {
        Self {
            status: Status::Success,
            data: Some(data),
            message: None,
            count: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }
}

impl ApiResponse<()> {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            data: None,
            message: Some(message.into()),
            count: None,
        }
    }

    /// Envelope with a status and message but no payload.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            status: Status::Success,
            data: None,
            message: Some(message.into()),
            count: None,
        }
    }
}

/// Acknowledgment for a single insert: `{ "acknowledged": true, "insertedId": "..." }`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertAck {
    pub acknowledged: bool,
    pub inserted_id: Value,
}

impl From<&InsertResult> for InsertAck {
    fn from(result: &InsertResult) -> Self {
        Self {
            acknowledged: result.acknowledged,
            inserted_id: result.inserted_id().map_or(Value::Null, bson_to_json),
        }
    }
}

/// Acknowledgment for a batch insert.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkInsertAck {
    pub acknowledged: bool,
    pub inserted_count: usize,
    pub inserted_ids: Vec<Value>,
}

impl From<&InsertResult> for BulkInsertAck {
    fn from(result: &InsertResult) -> Self {
        Self {
            acknowledged: result.acknowledged,
            inserted_count: result.inserted_count(),
            inserted_ids: result.inserted_ids.iter().map(bson_to_json).collect(),
        }
    }
}
