use crate::error::ConfigError;
use aws_sdk_dynamodb::{Endpoint, Region};
use http::Uri;

const DEFAULT_LOCAL_ENDPOINT: &str = "http://ddb:8000";

/// Process-wide settings, read once at start-up.
#[derive(Debug, Clone)]
pub struct Config {
    pub table_name: String,
    pub region: Option<String>,
    pub endpoint: Option<Uri>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let table_name = lookup("MOVIE_CREW_TABLE_NAME")
            .filter(|name| !name.is_empty())
            .ok_or(ConfigError::MissingVar("MOVIE_CREW_TABLE_NAME"))?;
        let region = lookup("REGION").filter(|region| !region.is_empty());

        // If env `ENV` is set to be local, talk to DynamoDB Local instead.
        let env = lookup("ENV").unwrap_or_else(|| "dev".to_string());
        let endpoint = if env.eq("local") {
            let endpoint =
                lookup("DDB_ENDPOINT").unwrap_or_else(|| DEFAULT_LOCAL_ENDPOINT.to_string());
            let uri = endpoint
                .parse::<Uri>()
                .map_err(|source| ConfigError::InvalidEndpoint { endpoint, source })?;
            Some(uri)
        } else {
            None
        };

        Ok(Config {
            table_name,
            region,
            endpoint,
        })
    }

    pub async fn sdk_config(&self) -> aws_config::SdkConfig {
        let mut loader = aws_config::from_env();
        if let Some(region) = &self.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(uri) = &self.endpoint {
            loader = loader.endpoint_resolver(Endpoint::immutable(uri.clone()));
        }
        loader.load().await
    }
}
