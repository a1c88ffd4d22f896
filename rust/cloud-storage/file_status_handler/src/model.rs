use serde::Serialize;
use serde_json::Value;
use strum::{Display, EnumString};

use crate::error::IngestError;

/// Body returned to the invoking platform once the batch has been handled
pub const COMPLETED_BODY: &str = "Procesamiento completado";

/// Key of the list of notification entries in an s3 event
const RECORDS_KEY: &str = "Records";

/// How a failing message affects the rest of its batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "snake_case")]
pub enum BatchFailureMode {
    /// The first failure fails the whole invocation and the queue redelivers the entire batch
    #[default]
    FailFast,
    /// Every message is attempted and only the failed ones are reported back for redelivery
    ReportItemFailures,
}

/// The bucket and key an s3 notification refers to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageObject {
    pub bucket: String,
    pub key: String,
}

/// The result of unwrapping a queue message body
#[derive(Debug, PartialEq, Eq)]
pub enum StorageEvent {
    /// The body carried an s3 notification.
    /// Only the first entry is used, `ignored_entries` counts the rest.
    Object {
        object: StorageObject,
        ignored_entries: usize,
    },
    /// The body has no `Records` key, e.g. the `s3:TestEvent` sent when the notification is configured
    NotActionable,
}

impl StorageEvent {
    pub fn from_body(body: &str) -> Result<Self, IngestError> {
        let payload: Value = serde_json::from_str(body).map_err(IngestError::MalformedPayload)?;

        let payload = payload
            .as_object()
            .ok_or_else(|| IngestError::NotAnObject(json_type(&payload)))?;

        let Some(entries) = payload.get(RECORDS_KEY) else {
            return Ok(Self::NotActionable);
        };

        let entries = entries
            .as_array()
            .ok_or(IngestError::SchemaMismatch("Records"))?;

        let entry = entries
            .first()
            .ok_or(IngestError::SchemaMismatch("Records[0]"))?;

        let bucket = entry
            .pointer("/s3/bucket/name")
            .and_then(Value::as_str)
            .ok_or(IngestError::SchemaMismatch("s3.bucket.name"))?;

        let key = entry
            .pointer("/s3/object/key")
            .and_then(Value::as_str)
            .ok_or(IngestError::SchemaMismatch("s3.object.key"))?;

        Ok(Self::Object {
            object: StorageObject {
                bucket: bucket.to_string(),
                key: key.to_string(),
            },
            ignored_entries: entries.len() - 1,
        })
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A message the queue should redeliver
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BatchItemFailure {
    pub item_identifier: String,
}

impl BatchItemFailure {
    pub fn new(message_id: &str) -> Self {
        Self {
            item_identifier: message_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HandlerResponse {
    pub status_code: u16,
    pub body: String,
    /// Only present when the handler reports item failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_item_failures: Option<Vec<BatchItemFailure>>,
}

impl HandlerResponse {
    pub fn completed(batch_item_failures: Option<Vec<BatchItemFailure>>) -> Self {
        Self {
            status_code: 200,
            body: COMPLETED_BODY.to_string(),
            batch_item_failures,
        }
    }
}
