pub mod compile_error;
pub use compile_error::*;

pub mod ident_renderer;
pub use ident_renderer::*;

pub mod literal;
pub use literal::*;
