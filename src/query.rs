use crate::error::LookupError;
use serde_json::{json, Value};
use std::collections::BTreeMap;

pub const KEY_CONDITION: &str = "crewRole = :role AND movieId = :movieId";
pub const NAME_FILTER: &str = "contains(names, :nameSubstring)";

/// Expression attribute value bound to a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binding {
    S(String),
    N(i64),
}

pub type Bindings = BTreeMap<String, Binding>;

/// Parameters of one lookup, parsed from the inbound event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub role: String,
    pub movie_id: i64,
    pub name_filter: Option<String>,
}

impl LookupRequest {
    pub fn from_parts(
        role: Option<&str>,
        movie_id: Option<&str>,
        name: Option<&str>,
    ) -> Result<Self, LookupError> {
        let role = role.filter(|role| !role.is_empty()).ok_or(LookupError::Validation)?;
        let movie_id = movie_id
            .and_then(|id| id.parse::<i64>().ok())
            .ok_or(LookupError::Validation)?;
        let name_filter = name.filter(|name| !name.is_empty()).map(str::to_string);

        Ok(LookupRequest {
            role: role.to_string(),
            movie_id,
            name_filter,
        })
    }

    /// The object checked against the `MovieCrewRole` definition.
    pub fn candidate(&self) -> Value {
        json!({ "crewRole": self.role, "movieId": self.movie_id })
    }
}

/// A single key-condition query, optionally narrowed by a name filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrewQuery {
    filter: Option<&'static str>,
    bindings: Bindings,
}

impl CrewQuery {
    pub fn new(request: LookupRequest) -> Result<Self, LookupError> {
        let mut key = Bindings::new();
        key.insert(":role".to_string(), Binding::S(request.role));
        key.insert(":movieId".to_string(), Binding::N(request.movie_id));

        match request.name_filter {
            Some(name) => {
                let mut filter = Bindings::new();
                filter.insert(":nameSubstring".to_string(), Binding::S(name));
                Ok(CrewQuery {
                    filter: Some(NAME_FILTER),
                    bindings: merge_bindings(key, filter)?,
                })
            }
            None => Ok(CrewQuery {
                filter: None,
                bindings: key,
            }),
        }
    }

    pub fn key_condition_expression(&self) -> &'static str {
        KEY_CONDITION
    }

    pub fn filter_expression(&self) -> Option<&'static str> {
        self.filter
    }

    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }
}

/// Adds the filter's bindings to the key-condition bindings.
///
/// Key-condition placeholders are never replaced: a filter binding that reuses
/// one of them is rejected.
pub fn merge_bindings(key: Bindings, filter: Bindings) -> Result<Bindings, LookupError> {
    let mut merged = key;
    for (placeholder, value) in filter {
        if merged.contains_key(&placeholder) {
            return Err(LookupError::BindingConflict(placeholder));
        }
        merged.insert(placeholder, value);
    }
    Ok(merged)
}
