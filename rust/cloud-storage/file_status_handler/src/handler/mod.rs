use std::sync::Arc;

use aws_lambda_events::event::sqs::{SqsEvent, SqsMessage};
use lambda_runtime::{
    Error, LambdaEvent,
    tracing::{self},
};
use models_file_status::FileStatusRecord;

use crate::{
    error::IngestError,
    model::{BatchFailureMode, BatchItemFailure, HandlerResponse, StorageEvent},
    service::StatusTable,
};


/// What happened to a single queue message
#[derive(Debug, PartialEq, Eq)]
enum MessageOutcome {
    Written,
    Skipped,
}

#[derive(Debug, Default)]
struct BatchReport {
    written: usize,
    skipped: usize,
    failures: Vec<BatchItemFailure>,
}

/// Handles the SQS event.
/// Messages are processed in order, one status write per message carrying an s3 notification.
#[tracing::instrument(skip_all, fields(request_id = %event.context.request_id))]
pub async fn handler<T: StatusTable>(
    table: Arc<T>,
    batch_failure_mode: BatchFailureMode,
    event: LambdaEvent<SqsEvent>,
) -> Result<HandlerResponse, Error> {
    let records = event.payload.records;
    tracing::trace!(records = records.len(), mode = %batch_failure_mode, "processing batch");

    let report = process_batch(table.as_ref(), batch_failure_mode, &records).await?;

    tracing::info!(
        written = report.written,
        skipped = report.skipped,
        failed = report.failures.len(),
        "processed batch"
    );

    let batch_item_failures = match batch_failure_mode {
        BatchFailureMode::FailFast => None,
        BatchFailureMode::ReportItemFailures => Some(report.failures),
    };

    Ok(HandlerResponse::completed(batch_item_failures))
}

async fn process_batch<T: StatusTable>(
    table: &T,
    batch_failure_mode: BatchFailureMode,
    records: &[SqsMessage],
) -> Result<BatchReport, IngestError> {
    let mut report = BatchReport::default();

    for record in records {
        let message_id = record.message_id.as_deref();

        match process_message(table, record).await {
            Ok(MessageOutcome::Written) => report.written += 1,
            Ok(MessageOutcome::Skipped) => report.skipped += 1,
            Err(e) => {
                tracing::error!(error=?e, message_id=?message_id, "failed to process message");

                match (batch_failure_mode, message_id) {
                    (BatchFailureMode::ReportItemFailures, Some(message_id)) => {
                        report.failures.push(BatchItemFailure::new(message_id));
                    }
                    // a failure without a message id cannot be reported, so the whole batch is retried
                    _ => return Err(e),
                }
            }
        }
    }

    Ok(report)
}

#[tracing::instrument(skip_all, fields(message_id = ?record.message_id))]
async fn process_message<T: StatusTable>(
    table: &T,
    record: &SqsMessage,
) -> Result<MessageOutcome, IngestError> {
    let body = record.body.as_deref().unwrap_or_default();

    let (object, ignored_entries) = match StorageEvent::from_body(body)? {
        StorageEvent::Object {
            object,
            ignored_entries,
        } => (object, ignored_entries),
        StorageEvent::NotActionable => {
            tracing::debug!("message does not carry a storage event, skipping");
            return Ok(MessageOutcome::Skipped);
        }
    };

    if ignored_entries > 0 {
        tracing::warn!(
            ignored_entries,
            "storage event has more than one entry, only the first is processed"
        );
    }

    tracing::info!(bucket=%object.bucket, key=%object.key, "processing file");

    table
        .upsert(FileStatusRecord::processed(object.bucket, object.key))
        .await
        .map_err(|e| IngestError::Write(e.into()))?;

    Ok(MessageOutcome::Written)
}
