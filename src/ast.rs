use serde::{Deserialize, Serialize};

use crate::node::ConfigNode;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Scalar(String),
    Item(Vec<String>), // identifier followed by its arguments
    Node(ConfigNode),
}

impl Value {
    pub fn as_scalar(&self) -> Option<&str> {
        if let Value::Scalar(s) = self {
            Some(s)
        } else {
            None
        }
    }

    pub fn as_item(&self) -> Option<&[String]> {
        if let Value::Item(tokens) = self {
            Some(tokens)
        } else {
            None
        }
    }

    pub fn as_node(&self) -> Option<&ConfigNode> {
        if let Value::Node(node) = self {
            Some(node)
        } else {
            None
        }
    }

    pub fn as_node_mut(&mut self) -> Option<&mut ConfigNode> {
        if let Value::Node(node) = self {
            Some(node)
        } else {
            None
        }
    }

    /// First token of an item.
    pub fn identifier(&self) -> Option<&str> {
        self.as_item().and_then(|tokens| tokens.first()).map(String::as_str)
    }
}

/// One value of a node together with the comments attached to it.
///
/// `comment` trails the entry's own line (or the `{` line of a node);
/// `prefix_comment` is the block of `#` lines directly above it. An empty
/// comment or comment block is stored as absent.
///
/// Comment text should carry no surrounding whitespace and no newline: an
/// empty line inside a `prefix_comment` renders as a bare `#`, which reads
/// back as a blank line and drops the block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawEntry")]
pub struct Entry {
    value: Value,
    comment: Option<String>,
    prefix_comment: Option<Vec<String>>,
}

impl Entry {
    pub fn new(value: Value, comment: Option<String>, prefix_comment: Option<Vec<String>>) -> Self {
        Self {
            value,
            comment: comment.filter(|c| !c.is_empty()),
            prefix_comment: prefix_comment.filter(|block| !block.is_empty()),
        }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut Value {
        &mut self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn prefix_comment(&self) -> Option<&[String]> {
        self.prefix_comment.as_deref()
    }

    pub fn set_comment(&mut self, comment: Option<String>) {
        self.comment = comment.filter(|c| !c.is_empty());
    }

    pub fn set_prefix_comment(&mut self, prefix_comment: Option<Vec<String>>) {
        self.prefix_comment = prefix_comment.filter(|block| !block.is_empty());
    }
}

#[derive(Deserialize)]
struct RawEntry {
    value: Value,
    #[serde(default)]
    comment: Option<String>,
    #[serde(default)]
    prefix_comment: Option<Vec<String>>,
}

impl From<RawEntry> for Entry {
    fn from(raw: RawEntry) -> Self {
        Entry::new(raw.value, raw.comment, raw.prefix_comment)
    }
}

impl From<Value> for Entry {
    fn from(value: Value) -> Self {
        Entry::new(value, None, None)
    }
}
