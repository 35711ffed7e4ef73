use indexmap::IndexMap;

use super::*;
use crate::PikError;

impl ConfigNode {
    /// Entry at `index`.
    ///
    /// # Errors
    /// Returns `PikError::IndexOutOfRange` if `index >= self.len()`.
    pub fn get(&self, index: usize) -> Result<&Entry, PikError> {
        let len = self.entries.len();
        self.entries
            .get(index)
            .ok_or_else(|| PikError::index_out_of_range(index, len))
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut Entry, PikError> {
        let len = self.entries.len();
        self.entries
            .get_mut(index)
            .ok_or_else(|| PikError::index_out_of_range(index, len))
    }

    /// Replace the entry at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, entry: Entry) -> Result<Entry, PikError> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, entry))
    }

    /// Insert before `index`; `index == len()` appends.
    pub fn insert(&mut self, index: usize, entry: Entry) -> Result<(), PikError> {
        if index > self.entries.len() {
            return Err(PikError::index_out_of_range(index, self.entries.len()));
        }
        self.entries.insert(index, entry);
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<Entry, PikError> {
        if index >= self.entries.len() {
            return Err(PikError::index_out_of_range(index, self.entries.len()));
        }
        Ok(self.entries.remove(index))
    }

    /// First item whose identifier matches, as its full token list.
    pub fn find_item(&self, identifier: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .filter_map(|entry| entry.value().as_item())
            .find(|tokens| tokens.first().is_some_and(|id| id == identifier))
    }

    /// All items whose identifier matches, in file order.
    pub fn find_items<'a>(&'a self, identifier: &'a str) -> impl Iterator<Item = &'a [String]> + 'a {
        self.entries
            .iter()
            .filter_map(|entry| entry.value().as_item())
            .filter(move |tokens| tokens.first().is_some_and(|id| id == identifier))
    }

    /// Arguments of the first item named `identifier` (tokens after the identifier).
    pub fn item_args(&self, identifier: &str) -> Option<&[String]> {
        self.find_item(identifier).map(|tokens| &tokens[1..])
    }

    pub fn nodes(&self) -> impl Iterator<Item = &ConfigNode> {
        self.entries.iter().filter_map(|entry| entry.value().as_node())
    }

    pub fn scalars(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(|entry| entry.value().as_scalar())
    }

    /// Direct items grouped by identifier.
    ///
    /// Keys keep the order in which each identifier first appears; each key
    /// maps to the argument lists of every item with that identifier.
    pub fn items_by_identifier(&self) -> IndexMap<&str, Vec<&[String]>> {
        let mut grouped: IndexMap<&str, Vec<&[String]>> = IndexMap::new();
        for tokens in self.entries.iter().filter_map(|entry| entry.value().as_item()) {
            if let Some((identifier, args)) = tokens.split_first() {
                grouped.entry(identifier.as_str()).or_default().push(args);
            }
        }
        grouped
    }
}
