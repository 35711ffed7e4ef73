use serde::{Deserialize, Serialize};

use crate::ast::{Entry, Value};

mod access;

/// An ordered list of entries. The root of a file is a `ConfigNode` without
/// braces; every nested `{ ... }` block is a `Value::Node`.
///
/// Equality is structural and order-sensitive: two nodes are equal when they
/// hold equal entries (value, inline comment and prefix comment) in the same
/// order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigNode {
    entries: Vec<Entry>,
}

impl ConfigNode {
    /// Build a node pre-populated with fully formed entries.
    ///
    /// # Examples
    /// ```
    /// use pik_cfg::{ConfigNode, Entry, Value};
    ///
    /// let node = ConfigNode::new(vec![
    ///     Entry::new(Value::Scalar("3".into()), Some("count".into()), None),
    /// ]);
    /// assert_eq!(node.len(), 1);
    /// ```
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// Append a value with its comments. Existing entries are never reordered.
    pub fn append(&mut self, value: Value, comment: Option<String>, prefix_comment: Option<Vec<String>>) {
        self.entries.push(Entry::new(value, comment, prefix_comment));
    }

    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Build a child node from `entries` and append it as a nested block.
    pub fn add_node(&mut self, entries: Vec<Entry>, comment: Option<String>, prefix_comment: Option<Vec<String>>) {
        self.append(Value::Node(ConfigNode::new(entries)), comment, prefix_comment);
    }

    pub fn add_value(&mut self, value: impl Into<String>, comment: Option<String>, prefix_comment: Option<Vec<String>>) {
        self.append(Value::Scalar(value.into()), comment, prefix_comment);
    }

    /// Append an item whose tokens are `identifier` followed by `args`.
    ///
    /// # Examples
    /// ```
    /// use pik_cfg::{ConfigNode, Value};
    ///
    /// let mut node = ConfigNode::default();
    /// node.add_item("pos", ["1.0", "2.0", "3.0"], None, None);
    /// assert_eq!(
    ///     node.get(0).unwrap().value(),
    ///     &Value::Item(vec!["pos".into(), "1.0".into(), "2.0".into(), "3.0".into()])
    /// );
    /// ```
    pub fn add_item<I, S>(
        &mut self,
        identifier: impl Into<String>,
        args: I,
        comment: Option<String>,
        prefix_comment: Option<Vec<String>>,
    ) where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tokens = vec![identifier.into()];
        tokens.extend(args.into_iter().map(Into::into));
        self.append(Value::Item(tokens), comment, prefix_comment);
    }

    /// Number of direct entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }
}

impl From<Vec<Entry>> for ConfigNode {
    fn from(entries: Vec<Entry>) -> Self {
        ConfigNode::new(entries)
    }
}

impl FromIterator<Entry> for ConfigNode {
    fn from_iter<T: IntoIterator<Item = Entry>>(iter: T) -> Self {
        ConfigNode::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ConfigNode {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for ConfigNode {
    type Item = Entry;
    type IntoIter = std::vec::IntoIter<Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests;
