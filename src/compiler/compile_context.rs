use crate::{access::{AccessControl, AccessType}, compiler::CompilerConfig};

/// What a compilation needs from the process: defaults, the allow-list cache
/// and whether table reads must be checked against it.
#[derive(Debug, Clone, Copy)]
pub struct CompileContext<'a> {
    pub config: &'a CompilerConfig,
    pub access: &'a AccessControl,
    pub check_table_access: bool,
    pub access_type: AccessType,
}

impl<'a> CompileContext<'a> {
    /// Uses the process-wide access control, checks disabled.
    pub fn new(config: &'a CompilerConfig) -> Self {
        Self {
            config,
            access: AccessControl::global(),
            check_table_access: false,
            access_type: AccessType::Service,
        }
    }

    pub fn with_access(mut self, access: &'a AccessControl) -> Self {
        self.access = access;
        self
    }

    pub fn checking_table_access(mut self, check: bool) -> Self {
        self.check_table_access = check;
        self
    }

    pub fn as_access_type(mut self, access_type: AccessType) -> Self {
        self.access_type = access_type;
        self
    }
}
