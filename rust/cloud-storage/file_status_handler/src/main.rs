mod config;
mod error;
mod handler;
mod model;
mod service;

use std::sync::Arc;

use aws_config::{BehaviorVersion, meta::region::RegionProviderChain};
use aws_lambda_events::sqs::SqsEvent;
use aws_sdk_dynamodb::config::Region;
use config::Config;
use dynamodb_client::DynamodbClient;
use handler::handler;
use lambda_entrypoint::LambdaEntrypoint;
use lambda_runtime::{Error, LambdaEvent, run, service_fn, tracing};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let entrypoint = LambdaEntrypoint::default().init();

    tracing::trace!(environment=%entrypoint.environment(), "initiating lambda");

    let config = Config::from_env()?;

    tracing::trace!(
        table=%config.dynamo_table_name,
        batch_failure_mode=%config.batch_failure_mode,
        "initialized config"
    );

    let region_provider = RegionProviderChain::default_provider().or_else(Region::new("us-east-1"));
    let aws_config = aws_config::defaults(BehaviorVersion::latest())
        .region(region_provider)
        .load()
        .await;

    let dynamodb_client = DynamodbClient::new(&aws_config, Some(config.dynamo_table_name));

    tracing::trace!("initialized dynamodb client");

    let shared_table = Arc::new(dynamodb_client.file_status);
    let batch_failure_mode = config.batch_failure_mode;

    let func = service_fn(move |event: LambdaEvent<SqsEvent>| {
        let table = shared_table.clone();
        async move { handler(table, batch_failure_mode, event).await }
    });

    run(func).await
}
