use item_api::handlers::create;
use item_api::{DynamoDbStore, HandlerConfig};
use lambda_http::{run, service_fn, tracing, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    // A missing TABLE_NAME or PRIMARY_KEY is a wiring defect; abort
    // initialization instead of answering requests.
    let config = HandlerConfig::from_env()?;

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let client = aws_sdk_dynamodb::Client::new(&aws_config);
    let store = DynamoDbStore::new(client, &config);

    run(service_fn(|event| {
        create::function_handler(&store, &config.primary_key, event)
    }))
    .await
}
