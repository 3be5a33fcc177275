use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::access::{AccessError, AccessType, AllowList, AllowLists};

/// Where each access-identity class' allow-list document lives.
///
/// A class without a document has no allow-list at all; reads under it fail
/// with `UnknownAccessType`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessConfig {
    /// Allow-list applied when queries run as the service identity
    #[serde(default)]
    pub service_document: Option<PathBuf>,
    /// Allow-list applied when queries run as the caller
    #[serde(default)]
    pub caller_document: Option<PathBuf>,
}

impl AccessConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from(service_document: impl Into<PathBuf>, caller_document: impl Into<PathBuf>) -> Self {
        Self {
            service_document: Some(service_document.into()),
            caller_document: Some(caller_document.into()),
        }
    }

    /// Convenience: only the service identity has an allow-list.
    pub fn service_only(service_document: impl Into<PathBuf>) -> Self {
        Self {
            service_document: Some(service_document.into()),
            caller_document: None,
        }
    }

    fn document(&self, access: AccessType) -> Option<&Path> {
        match access {
            AccessType::Service => self.service_document.as_deref(),
            AccessType::Caller => self.caller_document.as_deref(),
        }
    }

    /// Read and parse every configured document.
    pub async fn load(&self) -> Result<AllowLists, AccessError> {
        let mut lists = AllowLists::new();
        for access in [AccessType::Service, AccessType::Caller] {
            let Some(path) = self.document(access) else {
                continue;
            };

            let content = tokio::fs::read_to_string(path).await
                .map_err(|err| AccessError::Load(format!("could not read {} allow-list {}: {}", access, path.display(), err)))?;

            let list = AllowList::from_json(&content)?;
            tracing::debug!(access = %access, databases = list.databases.len(), "loaded table allow-list");
            lists.insert(access, list);
        }
        Ok(lists)
    }
}
