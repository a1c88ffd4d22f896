use aws_config::SdkConfig;

mod file_status;

use models_file_status::FileStatusRecord;

#[derive(Debug, Clone)]
pub struct DynamodbClient {
    pub file_status: FileStatusTable,
}

impl DynamodbClient {
    pub fn new(aws_config: &SdkConfig, file_status_table: Option<String>) -> Self {
        let client = aws_sdk_dynamodb::Client::new(aws_config);

        Self::new_from_client(client, file_status_table)
    }

    pub fn new_from_client(
        client: aws_sdk_dynamodb::Client,
        file_status_table: Option<String>,
    ) -> Self {
        Self {
            file_status: FileStatusTable {
                table: file_status_table,
                client,
            },
        }
    }
}

/// Access to the table holding one status record per uploaded file
#[derive(Debug, Clone)]
pub struct FileStatusTable {
    table: Option<String>,
    client: aws_sdk_dynamodb::Client,
}

impl FileStatusTable {
    fn table(&self) -> anyhow::Result<&str> {
        self.table
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("file_status_table is not configured"))
    }

    /// Upserts the status record. An existing record with the same id is overwritten.
    #[tracing::instrument(skip(self))]
    pub async fn put_file_status(&self, record: &FileStatusRecord) -> anyhow::Result<()> {
        let table = self.table()?;
        file_status::put_file_status(&self.client, table, record).await
    }
}
