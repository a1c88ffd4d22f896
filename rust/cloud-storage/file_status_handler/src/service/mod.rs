use models_file_status::FileStatusRecord;

/// The durable store file statuses are recorded in
#[cfg_attr(test, mockall::automock)]
pub trait StatusTable: Send + Sync + 'static {
    /// Writes the record, replacing any record with the same id
    fn upsert(
        &self,
        record: FileStatusRecord,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;
}

impl StatusTable for dynamodb_client::FileStatusTable {
    fn upsert(
        &self,
        record: FileStatusRecord,
    ) -> impl Future<Output = anyhow::Result<()>> + Send {
        async move { self.put_file_status(&record).await }
    }
}
