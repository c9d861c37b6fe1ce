use item_api::handlers::delete;
use item_api::{DynamoDbStore, HandlerConfig};
use lambda_http::{run, service_fn, tracing, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    let config = HandlerConfig::from_env()?;

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let client = aws_sdk_dynamodb::Client::new(&aws_config);
    let store = DynamoDbStore::new(client, &config);

    run(service_fn(|event| delete::function_handler(&store, event))).await
}
