//! Configuration loading.
//!
//! Two configuration records exist:
//!
//! - [`DbConfig`]: connection parameters for the upstream Postgres instance
//!   (`DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASS`, `DB_NAME`, `SECRET_ID`).
//! - [`ServerConfig`]: server behaviour (`DEBUG`, `READ_ONLY`, `MAX_ROWS`,
//!   `QUERY_TIMEOUT_SECS`, `MCP_HTTP_HOST`, `MCP_HTTP_PORT`).
//!
//! Both support construction from an arbitrary lookup function so tests can
//! supply variables without mutating the process environment.

mod db;
mod server;

pub use db::DbConfig;
pub use server::{ServerConfig, Transport};

use crate::error::ConfigError;

/// Look up an environment variable through the given lookup function,
/// treating an empty value as unset.
fn lookup_var(lookup: &impl Fn(&str) -> Option<String>, var: &'static str) -> Option<String> {
    lookup(var).filter(|v| !v.is_empty())
}

/// Look up a required variable, failing fast when it is absent.
fn require_var(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<String, ConfigError> {
    lookup_var(lookup, var).ok_or(ConfigError::MissingVar(var))
}

/// Parse an optional boolean variable ("true"/"1" and "false"/"0", case
/// insensitive). Absent means `default`.
fn parse_bool(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: bool,
) -> Result<bool, ConfigError> {
    match lookup_var(lookup, var) {
        None => Ok(default),
        Some(value) => match value.to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            _ => Err(ConfigError::InvalidVar { var, value }),
        },
    }
}

/// Parse an optional numeric variable. Absent means `default`.
fn parse_num<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup_var(lookup, var) {
        None => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidVar { var, value }),
    }
}
