use once_cell::sync::{Lazy, OnceCell};

use crate::access::{AccessConfig, AccessError, AccessType, AllowLists};

static GLOBAL_ACCESS: Lazy<AccessControl> = Lazy::new(AccessControl::new);

/// Lifecycle of the allow-list cache. Moves one way, never back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AccessState<'a> {
    Uninitialized,
    Ready(&'a AllowLists),
}

/// How `initialize` obtains its allow-lists.
#[derive(Debug, Clone)]
pub enum AccessSource {
    Explicit(AllowLists),
    Documents(AccessConfig),
}

/// Requested table, as seen by the allow-list lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReadRequest<'a> {
    pub db: Option<&'a str>,
    pub schema: Option<&'a str>,
    pub table: Option<&'a str>,
    pub access: AccessType,
}

/// Table allow-list cache. Written once, then only read, so lookups need no
/// locking.
#[derive(Debug, Default)]
pub struct AccessControl {
    lists: OnceCell<AllowLists>,
}

impl AccessControl {
    pub fn new() -> Self {
        Self { lists: OnceCell::new() }
    }

    /// Process-wide instance initialized at startup.
    pub fn global() -> &'static AccessControl {
        &GLOBAL_ACCESS
    }

    /// Build an already-Ready instance.
    pub fn ready(lists: AllowLists) -> Self {
        Self { lists: OnceCell::with_value(lists) }
    }

    pub fn state(&self) -> AccessState<'_> {
        match self.lists.get() {
            Some(lists) => AccessState::Ready(lists),
            None => AccessState::Uninitialized,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.lists.get().is_some()
    }

    pub async fn initialize(&self, source: AccessSource) -> Result<(), AccessError> {
        let lists = match source {
            AccessSource::Explicit(lists) => lists,
            AccessSource::Documents(config) => config.load().await?,
        };
        self.set(lists)
    }

    fn set(&self, lists: AllowLists) -> Result<(), AccessError> {
        let count = lists.len();
        if self.lists.set(lists).is_err() {
            tracing::warn!("table access control initialized twice; keeping the first allow-lists");
            return Err(AccessError::AlreadyInitialized);
        }
        tracing::info!(access_types = count, "table access control ready");
        Ok(())
    }

    pub fn can_read(&self, request: &ReadRequest) -> Result<bool, AccessError> {
        let AccessState::Ready(lists) = self.state() else {
            return Err(AccessError::NotInitialized);
        };

        let Some(list) = lists.get(request.access) else {
            return Err(AccessError::UnknownAccessType(request.access.to_string()));
        };

        list.can_read(request.db, request.schema, request.table).inspect_err(|err| {
            tracing::warn!(access = %request.access, error = %err, "table read denied");
        })
    }
}
