//! Opaque key-value store for translation entries.
//!
//! Entries are keyed `"{resourceIdentifier}:{entryIndex}"`. The protection
//! engine imposes no format constraints on the values; persistence and sync
//! belong to external tooling.

use std::collections::HashMap;

/// A plain string dictionary of translation entries.
#[derive(Debug, Clone, Default)]
pub struct TranslationStore(pub HashMap<String, String>);

impl TranslationStore {
    pub fn new() -> Self {
        TranslationStore(HashMap::new())
    }

    /// Canonical entry key for an entry of a game resource.
    pub fn key(resource: &str, index: usize) -> String {
        format!("{}:{}", resource, index)
    }

    pub fn with_entry(&mut self, key: &str, value: &str) -> &mut Self {
        self.0.insert(key.to_owned(), value.to_owned());
        self
    }

    pub fn set(&mut self, resource: &str, index: usize, value: &str) {
        self.0.insert(Self::key(resource, index), value.to_owned());
    }

    pub fn get(&self, key: &str) -> Option<&String> {
        self.0.get(key)
    }

    pub fn get_or_default<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.0.get(key).map(String::as_str).unwrap_or(default)
    }

    pub fn entries(&self) -> &HashMap<String, String> {
        &self.0
    }

    pub fn entries_mut(&mut self) -> &mut HashMap<String, String> {
        &mut self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
