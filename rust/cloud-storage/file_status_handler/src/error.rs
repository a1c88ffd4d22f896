use thiserror::Error;

/// The ways processing a single queue message can fail
#[derive(Debug, Error)]
pub enum IngestError {
    /// The message body is not valid json
    #[error("message body is not valid json: {0}")]
    MalformedPayload(#[source] serde_json::Error),
    /// The body is valid json but not an object, so it cannot carry a storage event
    #[error("message body is a json {0}, expected an object")]
    NotAnObject(&'static str),
    /// The body carries a storage event without one of the required fields
    #[error("storage event is missing required field {0}")]
    SchemaMismatch(&'static str),
    /// The status table rejected the write
    #[error("failed to write file status: {0}")]
    Write(#[source] Box<dyn std::error::Error + Send + Sync>),
}
