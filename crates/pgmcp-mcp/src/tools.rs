//! Tool registry and the fixed tool set.
//!
//! The registry maps tool names to definitions. It is populated once at
//! startup and never mutated while serving.

use crate::protocol::{ToolAnnotations, ToolDefinition};
use serde_json::json;
use std::collections::BTreeMap;

/// Registry of available MCP tools.
///
/// Backed by an ordered map so `tools/list` output is deterministic.
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: BTreeMap<String, ToolDefinition>,
}

impl ToolRegistry {
    /// Create a new empty tool registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the fixed pgmcp tool set.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for tool in builtin_tools() {
            registry.register(tool);
        }
        registry
    }

    /// Register a tool.
    pub fn register(&mut self, tool: ToolDefinition) {
        self.tools.insert(tool.name.clone(), tool);
    }

    /// Get a tool by name.
    pub fn get(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.get(name)
    }

    /// Check if a tool exists.
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// List all tools in name order.
    pub fn list(&self) -> Vec<&ToolDefinition> {
        self.tools.values().collect()
    }

    /// Get the number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Get tool names in order.
    pub fn names(&self) -> Vec<&str> {
        self.tools.keys().map(|s| s.as_str()).collect()
    }
}

fn read_only_annotation() -> Option<ToolAnnotations> {
    Some(ToolAnnotations {
        read_only: Some(true),
    })
}

/// The fixed tool set exposed by the server.
pub fn builtin_tools() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: "list_tables".to_string(),
            description: Some("List the base tables of the connected database".to_string()),
            input_schema: json!({
                "type": "object",
                "properties": {},
                "additionalProperties": false
            }),
            annotations: read_only_annotation(),
        },
        ToolDefinition {
            name: "get_table_schema".to_string(),
            description: Some(
                "Get column names, types, and nullability for a table".to_string(),
            ),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "table_name": {
                        "type": "string",
                        "description": "Name of the table"
                    }
                },
                "required": ["table_name"],
                "additionalProperties": false
            }),
            annotations: read_only_annotation(),
        },
        ToolDefinition {
            name: "get_table_data".to_string(),
            description: Some("Fetch a bounded page of rows from a table".to_string()),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "table_name": {
                        "type": "string",
                        "description": "Name of the table"
                    },
                    "limit": {
                        "type": "integer",
                        "minimum": 0,
                        "description": "Maximum rows to return (default 100, capped by the server)"
                    },
                    "offset": {
                        "type": "integer",
                        "minimum": 0,
                        "description": "Rows to skip (default 0)"
                    }
                },
                "required": ["table_name"],
                "additionalProperties": false
            }),
            annotations: read_only_annotation(),
        },
        ToolDefinition {
            name: "run_query".to_string(),
            description: Some(
                "Run a SQL statement. Caller values must be passed as bind parameters \
                 ($1, $2, ...) in params, never interpolated into the SQL text."
                    .to_string(),
            ),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "sql": {
                        "type": "string",
                        "description": "SQL text with $n placeholders"
                    },
                    "params": {
                        "type": "array",
                        "items": {
                            "type": ["string", "number", "boolean", "null"]
                        },
                        "description": "Values for the $n placeholders"
                    }
                },
                "required": ["sql"],
                "additionalProperties": false
            }),
            annotations: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registry_holds_the_fixed_set() {
        let registry = ToolRegistry::builtin();
        assert_eq!(
            registry.names(),
            vec![
                "get_table_data",
                "get_table_schema",
                "list_tables",
                "run_query"
            ]
        );
    }

    #[test]
    fn lookup_by_name() {
        let registry = ToolRegistry::builtin();
        assert!(registry.contains("run_query"));
        assert!(registry.get("nonexistent").is_none());
    }

    #[test]
    fn read_tools_are_annotated() {
        let registry = ToolRegistry::builtin();
        let schema_tool = registry.get("get_table_schema").unwrap();
        assert_eq!(
            schema_tool.annotations.as_ref().unwrap().read_only,
            Some(true)
        );
        assert!(registry.get("run_query").unwrap().annotations.is_none());
    }

    #[test]
    fn input_schemas_declare_required_fields() {
        for tool in builtin_tools() {
            assert_eq!(tool.input_schema["type"], "object", "{}", tool.name);
        }
        let registry = ToolRegistry::builtin();
        let data_tool = registry.get("get_table_data").unwrap();
        assert_eq!(data_tool.input_schema["required"][0], "table_name");
    }
}
