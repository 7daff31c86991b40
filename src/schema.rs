//! The `MovieCrewRole` contract from the shared type schema.
//!
//! The schema file is owned by the API's type definitions and is embedded as-is;
//! only the definition this function needs is compiled.

use crate::error::SchemaError;
use jsonschema::JSONSchema;
use serde_json::Value;

const TYPES_SCHEMA: &str = include_str!("../schema/types.schema.json");
const MOVIE_CREW_ROLE: &str = "MovieCrewRole";

/// Compiled validator for `{ crewRole, movieId }` candidates.
pub struct CrewRoleValidator {
    compiled: JSONSchema,
}

impl CrewRoleValidator {
    pub fn new() -> Result<Self, SchemaError> {
        let schema: Value = serde_json::from_str(TYPES_SCHEMA)?;
        Self::from_schema(&schema)
    }

    fn from_schema(schema: &Value) -> Result<Self, SchemaError> {
        let definition = schema
            .get("definitions")
            .and_then(|defs| defs.get(MOVIE_CREW_ROLE))
            .ok_or(SchemaError::MissingDefinition(MOVIE_CREW_ROLE))?;

        let compiled = JSONSchema::compile(definition).map_err(|err| SchemaError::Compile {
            name: MOVIE_CREW_ROLE,
            reason: err.to_string(),
        })?;

        Ok(CrewRoleValidator { compiled })
    }

    pub fn validate(&self, candidate: &Value) -> bool {
        self.compiled.is_valid(candidate)
    }
}

impl std::fmt::Debug for CrewRoleValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CrewRoleValidator")
            .field("definition", &MOVIE_CREW_ROLE)
            .finish()
    }
}
