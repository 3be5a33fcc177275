use std::collections::HashMap;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::access::{AccessError, AccessType};

/// Key matched at any level only when the exact key is missing there.
pub const WILDCARD: &str = "*";

pub type TableRules = IndexMap<String, bool>;
pub type SchemaRules = IndexMap<String, TableRules>;

/// One access-identity class' rules: database -> schema -> table -> allowed.
/// Keys are uppercase names, `*` allowed at each level.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct AllowList {
    pub databases: IndexMap<String, SchemaRules>,
}

fn lookup<'a, V>(rules: &'a IndexMap<String, V>, key: Option<&str>) -> Option<&'a V> {
    key.and_then(|key| rules.get(key)).or_else(|| rules.get(WILDCARD))
}

fn requested(key: Option<&str>) -> String {
    key.unwrap_or("(none)").to_string()
}

impl AllowList {
    pub fn from_json(text: &str) -> Result<Self, AccessError> {
        serde_json::from_str(text).map_err(|err| AccessError::Load(format!("invalid allow-list document: {}", err)))
    }

    /// Each level falls back to `*` on its own; an exact key always wins,
    /// whatever its value.
    pub fn can_read(&self, db: Option<&str>, schema: Option<&str>, table: Option<&str>) -> Result<bool, AccessError> {
        let Some(schemas) = lookup(&self.databases, db) else {
            return Err(AccessError::UnknownDatabase { db: requested(db) });
        };

        let Some(tables) = lookup(schemas, schema) else {
            return Err(AccessError::UnknownSchema { db: requested(db), schema: requested(schema) });
        };

        match lookup(tables, table) {
            Some(true) => Ok(true),
            Some(false) => Err(AccessError::TableNotAllowed {
                db: requested(db),
                schema: requested(schema),
                table: requested(table),
            }),
            None => Err(AccessError::UnknownTable {
                db: requested(db),
                schema: requested(schema),
                table: requested(table),
            }),
        }
    }
}

/// Allow-lists of every loaded access-identity class.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AllowLists {
    by_type: HashMap<AccessType, AllowList>,
}

impl AllowLists {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, access: AccessType, list: AllowList) -> Self {
        self.insert(access, list);
        self
    }

    pub fn insert(&mut self, access: AccessType, list: AllowList) {
        self.by_type.insert(access, list);
    }

    pub fn get(&self, access: AccessType) -> Option<&AllowList> {
        self.by_type.get(&access)
    }

    pub fn len(&self) -> usize {
        self.by_type.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_type.is_empty()
    }
}
