use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Execution principal used to pick which allow-list applies.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessType {
    /// The service's own database identity (default).
    #[default]
    Service,
    /// The caller's identity, impersonated for the query.
    Caller,
}

impl AccessType {
    pub fn from_as_caller(as_caller: bool) -> Self {
        if as_caller { AccessType::Caller } else { AccessType::Service }
    }
}

impl Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessType::Service => write!(f, "service"),
            AccessType::Caller => write!(f, "caller"),
        }
    }
}
