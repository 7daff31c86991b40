use crate::error::LookupError;
use crate::query::{CrewQuery, LookupRequest};
use crate::response;
use crate::schema::CrewRoleValidator;
use crate::store::CrewStore;
use lambda_http::{Body, Error, Request, RequestExt, Response};
use serde_json::Value;
use tracing::{debug, error};

/// Serves `GET /crew/{role}/movies/{movieId}?name=...`.
///
/// Built once per process; every invocation borrows it.
pub struct LookupHandler<S> {
    store: S,
    validator: CrewRoleValidator,
}

impl<S: CrewStore> LookupHandler<S> {
    pub fn new(store: S, validator: CrewRoleValidator) -> Self {
        LookupHandler { store, validator }
    }

    pub async fn handle(&self, event: Request) -> Result<Response<Body>, Error> {
        let path_params = event.path_parameters();
        let query_params = event.query_string_parameters();

        let result = self
            .lookup(
                path_params.first("role"),
                path_params.first("movieId"),
                query_params.first("name"),
            )
            .await;

        match result {
            Ok(records) => {
                debug!(count = records.len(), "crew members found");
                response::crew_members(records)
            }
            Err(LookupError::Validation) => {
                debug!("rejected lookup with invalid role or movieId");
                response::invalid_input()
            }
            Err(err) => {
                error!(error = ?err, "movie crew lookup failed");
                response::internal_error()
            }
        }
    }

    async fn lookup(
        &self,
        role: Option<&str>,
        movie_id: Option<&str>,
        name: Option<&str>,
    ) -> Result<Vec<Value>, LookupError> {
        let request = LookupRequest::from_parts(role, movie_id, name)?;
        if !self.validator.validate(&request.candidate()) {
            return Err(LookupError::Validation);
        }

        let query = CrewQuery::new(request)?;
        let records = self.store.query(&query).await?;
        Ok(records)
    }
}
