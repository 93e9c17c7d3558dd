mod config;
mod error;
mod handler;
mod honeycode;
mod shadow;

use aws_config::BehaviorVersion;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

use crate::config::Config;
use crate::handler::process_event;
use crate::honeycode::StatusTable;
use crate::shadow::ShadowUpdate;

// Honeycode is only served out of us-west-2.
const HONEYCODE_REGION: &str = "us-west-2";

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false)
        .without_time() // CloudWatch will add the ingestion time
        .with_target(false)
        .init();

    let config = Config::from_env()?;
    let aws_config = aws_config::defaults(BehaviorVersion::latest())
        .region(HONEYCODE_REGION)
        .load()
        .await;
    let table = StatusTable::new(aws_sdk_honeycode::Client::new(&aws_config), config);

    run(service_fn(|event: LambdaEvent<ShadowUpdate>| async {
        process_event(event, &table).await.map_err(Error::from)
    }))
    .await
}
