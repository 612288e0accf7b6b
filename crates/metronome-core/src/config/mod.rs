//! Periodic-export configuration: source lookup, parsing and precedence.
mod error;
pub use error::{ConfigError, ConfigResult};

mod parse;

mod resolver;
pub use resolver::{Origin, load_periodic_options, resolve, resolve_from_env};
