// Author: Dustin Pilgrim
// License: MIT

use serde_json::json;

use crate::ast::{Entry, Value};
use crate::config::PikConfig;
use crate::node::ConfigNode;
use crate::PikError;

/// Export a config tree to pretty-printed JSON.
///
/// The tree becomes an array of entry objects so order and duplicate
/// identifiers survive:
/// - Scalars → `{"value": "token"}`
/// - Items → `{"item": ["identifier", "arg", ...]}`
/// - Nodes → `{"node": [ ...entries ]}`
/// - Comments → `"comment"` and `"prefix_comment"` keys, only when present
///
/// # Examples
/// ```
/// use pik_cfg::{parse_str, export::export_node_to_json};
///
/// let root = parse_str("name pellet # kind\n").unwrap();
/// let json = export_node_to_json(&root).unwrap();
/// assert!(json.contains("\"item\""));
/// ```
pub fn export_node_to_json(node: &ConfigNode) -> Result<String, PikError> {
    serde_json::to_string_pretty(&node_to_json(node)).map_err(|e| PikError::FileError {
        message: format!("Failed to serialize JSON: {}", e),
        path: "<json>".into(),
        hint: None,
        code: Some(405),
    })
}

/// Load a config file and export it to JSON in one call.
///
/// # Errors
/// Returns error if the file can't be read or has unbalanced braces.
pub fn export_config_file(path: &str) -> Result<String, PikError> {
    let config = PikConfig::from_file(path)?;
    export_node_to_json(config.root())
}

fn node_to_json(node: &ConfigNode) -> serde_json::Value {
    serde_json::Value::Array(node.iter().map(entry_to_json).collect())
}

fn entry_to_json(entry: &Entry) -> serde_json::Value {
    let mut out = match entry.value() {
        Value::Scalar(token) => json!({ "value": token }),
        Value::Item(tokens) => json!({ "item": tokens }),
        Value::Node(child) => json!({ "node": node_to_json(child) }),
    };

    if let Some(comment) = entry.comment() {
        out["comment"] = json!(comment);
    }
    if let Some(block) = entry.prefix_comment() {
        out["prefix_comment"] = json!(block);
    }
    out
}
