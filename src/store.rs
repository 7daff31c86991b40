use crate::error::StoreError;
use crate::query::{Binding, CrewQuery};
use async_trait::async_trait;
use aws_sdk_dynamodb::model::AttributeValue;
use aws_sdk_dynamodb::Client;
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

type DynamoDbItem = HashMap<String, AttributeValue>;

/// Read access to the movie crew table.
#[async_trait]
pub trait CrewStore: Send + Sync {
    /// Runs `query` once and returns the matching records in store order.
    async fn query(&self, query: &CrewQuery) -> Result<Vec<Value>, StoreError>;
}

pub struct DynamoCrewStore {
    client: Client,
    table_name: String,
}

impl DynamoCrewStore {
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        DynamoCrewStore {
            client,
            table_name: table_name.into(),
        }
    }
}

#[async_trait]
impl CrewStore for DynamoCrewStore {
    async fn query(&self, query: &CrewQuery) -> Result<Vec<Value>, StoreError> {
        let values: HashMap<String, AttributeValue> = query
            .bindings()
            .iter()
            .map(|(placeholder, binding)| (placeholder.clone(), attribute_value(binding)))
            .collect();

        debug!(
            table = %self.table_name,
            filter = query.filter_expression().is_some(),
            "querying movie crew"
        );

        let output = self
            .client
            .query()
            .table_name(&self.table_name)
            .key_condition_expression(query.key_condition_expression())
            .set_filter_expression(query.filter_expression().map(str::to_string))
            .set_expression_attribute_values(Some(values))
            .send()
            .await
            .map_err(|err| StoreError::Query {
                table: self.table_name.clone(),
                source: Box::new(err),
            })?;

        let items: Vec<DynamoDbItem> = output.items().unwrap_or_default().to_vec();
        let records = serde_dynamo::from_items(items)?;

        Ok(records)
    }
}

fn attribute_value(binding: &Binding) -> AttributeValue {
    match binding {
        Binding::S(val) => AttributeValue::S(val.to_string()),
        Binding::N(val) => AttributeValue::N(val.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bindings_map_to_attribute_values() {
        assert_eq!(
            attribute_value(&Binding::S("Director".to_string())),
            AttributeValue::S("Director".to_string())
        );
        assert_eq!(
            attribute_value(&Binding::N(100)),
            AttributeValue::N("100".to_string())
        );
    }

    #[test]
    fn items_decode_to_plain_json() {
        let mut item = DynamoDbItem::new();
        item.insert("crewRole".to_string(), AttributeValue::S("Director".to_string()));
        item.insert("movieId".to_string(), AttributeValue::N("100".to_string()));
        item.insert("names".to_string(), AttributeValue::S("Jane Smith".to_string()));

        let records: Vec<Value> = serde_dynamo::from_items(vec![item]).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["crewRole"], "Director");
        assert_eq!(records[0]["movieId"], json!(100));
        assert_eq!(records[0]["names"], "Jane Smith");
    }
}
