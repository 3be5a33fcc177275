use std::fmt::{self, Display};

/// Denials carry the level that failed and the requested key, never the
/// allow-list contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    NotInitialized,
    AlreadyInitialized,
    UnknownAccessType(String),
    UnknownDatabase { db: String },
    UnknownSchema { db: String, schema: String },
    UnknownTable { db: String, schema: String, table: String },
    TableNotAllowed { db: String, schema: String, table: String },
    /// An allow-list document could not be read or parsed.
    Load(String),
}

impl Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessError::NotInitialized => write!(f, "AccessError: table access control is not initialized"),
            AccessError::AlreadyInitialized => write!(f, "AccessError: table access control is already initialized"),
            AccessError::UnknownAccessType(access) => write!(f, "AccessError: no table allow-list for access type '{}'", access),
            AccessError::UnknownDatabase { db } => write!(f, "AccessError: database '{}' is not allowed", db),
            AccessError::UnknownSchema { db, schema } => write!(f, "AccessError: schema '{}.{}' is not allowed", db, schema),
            AccessError::UnknownTable { db, schema, table } => write!(f, "AccessError: table '{}.{}.{}' is not allowed", db, schema, table),
            AccessError::TableNotAllowed { db, schema, table } => write!(f, "AccessError: table '{}.{}.{}' is denied", db, schema, table),
            AccessError::Load(message) => write!(f, "AccessError: {}", message),
        }
    }
}

impl std::error::Error for AccessError {}
