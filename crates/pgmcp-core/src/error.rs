//! Configuration errors.

use thiserror::Error;

/// Errors raised while loading configuration from the environment.
///
/// These are fatal at startup: the process must not begin serving (or
/// attempt a connection) with incomplete configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable was not set.
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// An environment variable was set to a value that could not be parsed.
    #[error("invalid value for {var}: {value:?}")]
    InvalidVar { var: &'static str, value: String },
}
