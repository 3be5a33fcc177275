pub mod sql;
pub use sql::{CompileError, IdentRenderer, SqlLiteral};

pub mod access;
pub use access::{AccessConfig, AccessControl, AccessError, AccessSource, AccessType, AllowList, AllowLists};

pub mod query;
pub use query::{Filter, IdentRef, Identifier, JoinSpec, Operand, OrderEntry, QueryDefinition, TableRef};

pub mod compiler;
pub use compiler::{CompileContext, CompiledQuery, CompilerConfig, QueryPlanner};
