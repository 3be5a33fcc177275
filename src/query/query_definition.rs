use serde::Deserialize;
use serde_json::Value;

use crate::{access::AccessType, query::{Filter, IdentRef, JoinSpec, OrderEntry, TableRef}, sql::CompileError};

/// Request body describing one tabular query.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryDefinition {
    #[serde(flatten)]
    pub table: TableRef,
    #[serde(default)]
    pub columns: Vec<IdentRef>,
    #[serde(default)]
    pub filter: Option<Filter>,
    #[serde(default)]
    pub having: Option<Filter>,
    #[serde(default)]
    pub joins: Option<Vec<JoinSpec>>,
    #[serde(default)]
    pub order: Option<Vec<OrderEntry>>,
    #[serde(default)]
    pub limit: Option<u64>,
    #[serde(default)]
    pub offset: Option<u64>,
    #[serde(default)]
    pub distinct: bool,
    /// Run as the caller instead of the service identity.
    #[serde(default)]
    pub as_caller: bool,
}

impl QueryDefinition {
    pub fn new(table: TableRef, columns: Vec<IdentRef>) -> Self {
        Self {
            table,
            columns,
            filter: None,
            having: None,
            joins: None,
            order: None,
            limit: None,
            offset: None,
            distinct: false,
            as_caller: false,
        }
    }

    pub fn from_json(text: &str) -> Result<Self, CompileError> {
        serde_json::from_str(text).map_err(|err| CompileError::request(format!("invalid query definition: {}", err)))
    }

    pub fn from_value(value: Value) -> Result<Self, CompileError> {
        serde_json::from_value(value).map_err(|err| CompileError::request(format!("invalid query definition: {}", err)))
    }

    pub fn access_type(&self) -> AccessType {
        AccessType::from_as_caller(self.as_caller)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{access::AccessType, query::{IdentRef, QueryDefinition}, sql::CompileError};

    #[test]
    pub fn test_query_definition() {
        let query = QueryDefinition::from_value(json!({
            "table": "orders",
            "schema": "sales",
            "db": "prod",
            "tableAlias": "o",
            "columns": ["status", { "name": "*", "agg": "count", "alias": "n" }],
            "filter": { "gt": ["amount", 10] },
            "having": { "gt": [{ "name": "*", "agg": "count" }, 1] },
            "joins": [{ "table": "customers", "tableAlias": "c", "on": { "eq": [{ "name": "id", "from": "c" }, { "name": "customer_id", "from": "o" }] } }],
            "order": [{ "name": "status", "dir": "desc" }],
            "limit": 50,
            "offset": 100,
            "distinct": true,
            "asCaller": true
        })).expect("Failed to parse query definition");

        assert_eq!(query.table.table, IdentRef::from("orders"));
        assert_eq!(query.table.schema.as_deref(), Some("sales"));
        assert_eq!(query.table.db.as_deref(), Some("prod"));
        assert_eq!(query.columns.len(), 2);
        assert!(query.filter.is_some());
        assert!(query.having.is_some());
        assert_eq!(query.joins.as_ref().map(Vec::len), Some(1));
        assert_eq!(query.order.as_ref().map(Vec::len), Some(1));
        assert_eq!(query.limit, Some(50));
        assert_eq!(query.offset, Some(100));
        assert!(query.distinct);
        assert_eq!(query.access_type(), AccessType::Caller);
    }

    #[test]
    pub fn test_query_definition_minimal() {
        let query = QueryDefinition::from_json(r#"{ "table": "t", "columns": ["a"] }"#).expect("Failed to parse query definition");
        assert_eq!(query.access_type(), AccessType::Service);
        assert!(query.filter.is_none());
        assert!(!query.distinct);
    }

    #[test]
    pub fn test_query_definition_unknown_operator() {
        match QueryDefinition::from_json(r#"{ "table": "t", "columns": ["a"], "filter": { "regex": ["a", "'x'"] } }"#) {
            Err(CompileError::Request(message)) => assert!(message.contains("regex")),
            _ => panic!(),
        }
    }

    #[test]
    pub fn test_query_definition_negative_limit() {
        assert!(QueryDefinition::from_json(r#"{ "table": "t", "columns": ["a"], "limit": -1 }"#).is_err());
    }
}
