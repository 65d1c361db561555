//! Server behaviour configuration.

use super::{parse_bool, parse_num};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// MCP transport type.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    /// Standard input/output transport (for desktop clients that spawn the
    /// process directly).
    #[default]
    Stdio,
    /// HTTP transport.
    Http,
}

impl std::str::FromStr for Transport {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stdio" => Ok(Transport::Stdio),
            "http" => Ok(Transport::Http),
            other => Err(format!("unknown transport: {other}. Use 'stdio' or 'http'")),
        }
    }
}

impl std::fmt::Display for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Transport::Stdio => write!(f, "stdio"),
            Transport::Http => write!(f, "http"),
        }
    }
}

/// Behaviour configuration for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Transport to serve on.
    pub transport: Transport,

    /// HTTP listen host (only used with the HTTP transport).
    pub http_host: String,

    /// HTTP listen port (only used with the HTTP transport).
    pub http_port: u16,

    /// Verbose logging and error-detail attachment. Never alters query
    /// semantics.
    pub debug: bool,

    /// Reject mutating statements in `run_query`.
    pub read_only: bool,

    /// Hard cap on rows returned by any single tool invocation.
    pub max_rows: i64,

    /// Bound on the wall-clock time of a single database call.
    pub query_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            transport: Transport::default(),
            http_host: default_http_host(),
            http_port: default_http_port(),
            debug: false,
            read_only: false,
            max_rows: default_max_rows(),
            query_timeout_secs: default_query_timeout(),
        }
    }
}

impl ServerConfig {
    /// Load the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load the configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            transport: Transport::default(),
            http_host: super::lookup_var(&lookup, "MCP_HTTP_HOST")
                .unwrap_or_else(default_http_host),
            http_port: parse_num(&lookup, "MCP_HTTP_PORT", default_http_port())?,
            debug: parse_bool(&lookup, "DEBUG", false)?,
            read_only: parse_bool(&lookup, "READ_ONLY", false)?,
            max_rows: parse_num(&lookup, "MAX_ROWS", default_max_rows())?,
            query_timeout_secs: parse_num(&lookup, "QUERY_TIMEOUT_SECS", default_query_timeout())?,
        })
    }
}

fn default_http_host() -> String {
    "0.0.0.0".to_string()
}

fn default_http_port() -> u16 {
    8000
}

fn default_max_rows() -> i64 {
    1000
}

fn default_query_timeout() -> u64 {
    30
}
