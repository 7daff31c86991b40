mod config;
mod error;
mod handler;
mod query;
mod response;
mod schema;
mod store;

use aws_sdk_dynamodb::Client;
use config::Config;
use handler::LookupHandler;
use lambda_http::{service_fn, Error, Request};
use schema::CrewRoleValidator;
use store::DynamoCrewStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    setup_tracing();

    let config = Config::from_env()?;
    let sdk_config = config.sdk_config().await;
    let store = DynamoCrewStore::new(Client::new(&sdk_config), config.table_name.as_str());
    let handler = LookupHandler::new(store, CrewRoleValidator::new()?);

    info!(table = %config.table_name, local = config.endpoint.is_some(), "starting movie crew lookup");

    lambda_http::run(service_fn(|event: Request| handler.handle(event))).await
}

fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .without_time()
        .json()
        .init();
}
