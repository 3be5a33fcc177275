use serde::Deserialize;

use crate::query::IdentRef;

/// Table part of a query or join. A database is only valid together with a
/// schema.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRef {
    pub table: IdentRef,
    #[serde(default)]
    pub db: Option<String>,
    #[serde(default)]
    pub schema: Option<String>,
    #[serde(default)]
    pub table_alias: Option<String>,
}

impl TableRef {
    pub fn new(table: &str) -> Self {
        Self { table: IdentRef::from(table), db: None, schema: None, table_alias: None }
    }

    pub fn with_schema(mut self, schema: &str) -> Self {
        self.schema = Some(schema.to_string());
        self
    }

    pub fn with_db(mut self, db: &str) -> Self {
        self.db = Some(db.to_string());
        self
    }

    pub fn with_alias(mut self, alias: &str) -> Self {
        self.table_alias = Some(alias.to_string());
        self
    }
}
