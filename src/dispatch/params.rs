//! Per-request parameter store.
//!
//! An ordered string-to-string map shared between matcher-produced captures,
//! request-supplied fields, and handler reads/writes. Created fresh for each
//! request and discarded with it; never shared across requests, so no
//! locking.

/// Ordered key/value parameter store.
///
/// Keys are case-sensitive; last write wins but keeps the key's original
/// insertion position; an absent key is distinct from an empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterStore {
    entries: Vec<(String, String)>,
}

impl ParameterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a value. Absent keys return `None`, never the empty string.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Write a value, overwriting in place if the key already exists.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for ParameterStore {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut store = ParameterStore::new();
        for (key, value) in iter {
            store.set(key, value);
        }
        store
    }
}
