pub mod compiler_config;
pub use compiler_config::*;

pub mod compile_context;
pub use compile_context::*;

pub mod table_resolver;
pub use table_resolver::*;

pub mod filter_compiler;
pub use filter_compiler::*;

pub mod select_planner;
pub use select_planner::*;

pub mod join_planner;
pub use join_planner::*;

pub mod order_planner;
pub use order_planner::*;

pub mod query_plan;
pub use query_plan::*;

pub mod compiled_query;
pub use compiled_query::*;

pub mod query_planner;
pub use query_planner::*;

#[cfg(test)]
mod _tests;
