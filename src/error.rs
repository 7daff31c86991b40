use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable `{0}` must be set")]
    MissingVar(&'static str),
    #[error("invalid endpoint `{endpoint}`: {source}")]
    InvalidEndpoint {
        endpoint: String,
        source: http::uri::InvalidUri,
    },
}

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("failed to parse the shared type schema: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("definition `{0}` not found in the shared type schema")]
    MissingDefinition(&'static str),
    #[error("failed to compile definition `{name}`: {reason}")]
    Compile { name: &'static str, reason: String },
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("query against table `{table}` failed")]
    Query {
        table: String,
        #[source]
        source: BoxError,
    },
    #[error("failed to decode returned items")]
    Decode(#[from] serde_dynamo::Error),
}

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("invalid role or movieId")]
    Validation,
    #[error("binding `{0}` is already bound by the key condition")]
    BindingConflict(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}
