use std::fmt::{self, Display};

use crate::access::AccessError;

/// Every failure the compiler can report. Compilation stops at the first one;
/// no partial statement is ever returned next to an error.
#[derive(Debug, Clone, PartialEq)]
pub enum CompileError {
    /// A name or quoting that would not survive verbatim emission.
    InvalidIdentifier(String),
    /// A malformed filter/order/table shape or an unknown operator tag.
    Request(String),
    /// The table allow-list refused (or could not answer) a lookup.
    Access(AccessError),
}

impl CompileError {
    pub fn invalid_identifier(name: &str) -> Self {
        CompileError::InvalidIdentifier(name.to_string())
    }

    pub fn request(message: impl Into<String>) -> Self {
        CompileError::Request(message.into())
    }

    pub fn err<T>(self) -> Result<T, CompileError> {
        Err(self)
    }

    /// True for the access-control family. Both families are caller-caused.
    pub fn is_access_denied(&self) -> bool {
        matches!(self, CompileError::Access(_))
    }
}

impl From<AccessError> for CompileError {
    fn from(value: AccessError) -> Self {
        CompileError::Access(value)
    }
}

impl Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::InvalidIdentifier(name) => write!(f, "InvalidIdentifier: '{}'", name),
            CompileError::Request(message) => write!(f, "RequestError: {}", message),
            CompileError::Access(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CompileError {}
