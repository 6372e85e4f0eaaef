//! Command implementations.

pub mod boundaries;
pub mod config;
pub mod parse;

pub use self::boundaries::execute_boundaries;
pub use self::config::execute_config;
pub use self::parse::execute_parse;
