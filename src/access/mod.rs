pub mod access_type;
pub use access_type::*;

pub mod access_error;
pub use access_error::*;

pub mod allow_list;
pub use allow_list::*;

pub mod access_config;
pub use access_config::*;

pub mod access_control;
pub use access_control::*;
