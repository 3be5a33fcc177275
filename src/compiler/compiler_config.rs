use serde::Deserialize;

/// LIMIT applied when a query does not ask for one.
pub const DEFAULT_LIMIT: u64 = 1000;

/// Process-wide compiler settings.
///
/// - `default_database`/`default_schema` complete table paths for access
///   checks when the query leaves them out.
/// - `default_limit` is rendered when the query has no `limit`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompilerConfig {
    pub default_database: Option<String>,
    pub default_schema: Option<String>,
    pub default_limit: u64,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self { default_database: None, default_schema: None, default_limit: DEFAULT_LIMIT }
    }
}

impl CompilerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration with explicit default database and schema.
    pub fn from(default_database: &str, default_schema: &str) -> Self {
        Self {
            default_database: Some(default_database.to_string()),
            default_schema: Some(default_schema.to_string()),
            default_limit: DEFAULT_LIMIT,
        }
    }

    pub fn with_default_limit(mut self, default_limit: u64) -> Self {
        self.default_limit = default_limit;
        self
    }
}
