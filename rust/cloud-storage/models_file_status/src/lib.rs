use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The processing status of an uploaded file
#[derive(Debug, Serialize, Deserialize, Clone, Copy, EnumString, Display, Default, Eq, PartialEq)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FileStatus {
    #[default]
    Processed,
}

/// The status record stored for every uploaded file, keyed by the object key
#[derive(Debug, Serialize, Deserialize, Clone, Eq, PartialEq)]
pub struct FileStatusRecord {
    /// The object key of the uploaded file
    pub id: String,
    pub status: FileStatus,
    /// The bucket the file was uploaded to
    pub bucket: String,
}

impl FileStatusRecord {
    /// Builds the record for a file that has been processed
    pub fn processed(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            id: key.into(),
            status: FileStatus::Processed,
            bucket: bucket.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn status_is_screaming_snake_case() {
        assert_eq!(FileStatus::Processed.to_string(), "PROCESSED");
        assert_eq!(
            FileStatus::from_str("PROCESSED").unwrap(),
            FileStatus::Processed
        );
        assert!(FileStatus::from_str("processed").is_err());
    }

    #[test]
    fn processed_record_is_keyed_by_object_key() {
        let record = FileStatusRecord::processed("uploads", "invoices/2024/01.pdf");

        assert_eq!(record.id, "invoices/2024/01.pdf");
        assert_eq!(record.bucket, "uploads");
        assert_eq!(record.status, FileStatus::Processed);

        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            serde_json::json!({
                "id": "invoices/2024/01.pdf",
                "status": "PROCESSED",
                "bucket": "uploads",
            })
        );
    }
}
