//! # pgmcp-core
//!
//! Configuration types for the pgmcp starter kit.
//!
//! All configuration is resolved from the process environment exactly once at
//! startup and carried through the rest of the system as immutable values.
//! Handlers never read the environment directly.

pub mod config;
pub mod error;

pub use config::{DbConfig, ServerConfig, Transport};
pub use error::ConfigError;
