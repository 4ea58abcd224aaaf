//! Command implementations.

pub mod analyze;
pub mod config;
pub mod parse;
pub mod prompt;

pub use self::analyze::execute_analyze;
pub use self::config::execute_config;
pub use self::parse::execute_parse;
pub use self::prompt::execute_prompt;
