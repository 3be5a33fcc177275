use std::fmt::{self, Display};

use serde::Serialize;

/// Column metadata reported by the execution side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnMeta {
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
}

/// Result handed to the execution layer. The compiler only fills `sql`;
/// `columns` and `query_id` come back from the database.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompiledQuery {
    pub sql: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<ColumnMeta>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_id: Option<String>,
}

impl CompiledQuery {
    pub fn new(sql: String) -> Self {
        Self { sql, columns: None, query_id: None }
    }

    pub fn with_execution(mut self, columns: Vec<ColumnMeta>, query_id: Option<String>) -> Self {
        self.columns = Some(columns);
        self.query_id = query_id;
        self
    }

    /// Wrap a failed execution of this statement together with its SQL.
    pub fn execution_failure(&self, error: impl Display) -> ExecutionFailure {
        ExecutionFailure { message: error.to_string(), sql: self.sql.clone() }
    }
}

/// Downstream execution error with the statement attached for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionFailure {
    pub message: String,
    pub sql: String,
}

impl Display for ExecutionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExecutionFailure: {}\n  sql: {}", self.message, self.sql)
    }
}

impl std::error::Error for ExecutionFailure {}
