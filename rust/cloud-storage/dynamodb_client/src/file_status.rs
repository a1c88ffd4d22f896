use std::collections::HashMap;

use anyhow::Context;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::AttributeValue;
use models_file_status::FileStatusRecord;

/// Builds the item stored for a file status record
pub(crate) fn to_item(record: &FileStatusRecord) -> HashMap<String, AttributeValue> {
    HashMap::from([
        ("id".to_string(), AttributeValue::S(record.id.clone())),
        (
            "status".to_string(),
            AttributeValue::S(record.status.to_string()),
        ),
        ("bucket".to_string(), AttributeValue::S(record.bucket.clone())),
    ])
}

#[tracing::instrument(skip(client))]
pub async fn put_file_status(
    client: &Client,
    table: &str,
    record: &FileStatusRecord,
) -> anyhow::Result<()> {
    client
        .put_item()
        .table_name(table)
        .set_item(Some(to_item(record)))
        .send()
        .await
        .context("failed to put file status into DynamoDB")?;

    Ok(())
}
