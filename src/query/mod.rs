pub mod identifier;
pub use identifier::*;

pub mod operand;
pub use operand::*;

pub mod operators;
pub use operators::*;

pub mod filter;
pub use filter::*;

pub mod table_ref;
pub use table_ref::*;

pub mod join_spec;
pub use join_spec::*;

pub mod order_entry;
pub use order_entry::*;

pub mod query_definition;
pub use query_definition::*;
