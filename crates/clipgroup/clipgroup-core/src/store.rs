//! Property store capability and an in-memory implementation.
//!
//! The host document owns a flat, string-keyed property store on its root object. Groups only
//! ever talk to it through [`PropertyStore`], so hosts plug in their own bridge and tests use
//! [`MemoryStore`].

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// Operations the group layer needs from the host document's root object.
pub trait PropertyStore {
    /// Text property under `key`, `None` if absent.
    fn get_string(&self, key: &str) -> Option<String>;

    /// Create or overwrite a text property.
    fn set_string(&mut self, key: &str, value: &str);

    /// Remove the property under `key`. Missing keys are ignored.
    fn delete_property(&mut self, key: &str);

    /// Ordered text array under `key`; an absent property reads as empty.
    fn get_string_array(&self, key: &str) -> Vec<String>;

    /// Create or overwrite a text array property.
    fn set_string_array(&mut self, key: &str, values: &[String]);
}

/// A single stored property value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredProperty {
    Text(String),
    TextArray(Vec<String>),
}

/// Hash-map backed store. Serializes as a plain JSON object so document snapshots can be
/// kept as fixtures.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemoryStore {
    properties: HashMap<String, StoredProperty>,
    #[serde(skip)]
    write_count: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of mutating calls (`set_*`, `delete_property`) received so far.
    #[inline]
    pub fn write_count(&self) -> usize {
        self.write_count
    }

    #[inline]
    pub fn reset_write_count(&mut self) {
        self.write_count = 0;
    }

    pub fn get(&self, key: &str) -> Option<&StoredProperty> {
        self.properties.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }
}

/// Equal when the stored properties are equal; the write counter is ignored.
impl PartialEq for MemoryStore {
    fn eq(&self, other: &Self) -> bool {
        self.properties == other.properties
    }
}

impl PropertyStore for MemoryStore {
    fn get_string(&self, key: &str) -> Option<String> {
        match self.properties.get(key) {
            Some(StoredProperty::Text(text)) => Some(text.clone()),
            _ => None,
        }
    }

    fn set_string(&mut self, key: &str, value: &str) {
        self.write_count += 1;
        self.properties
            .insert(key.to_string(), StoredProperty::Text(value.to_string()));
    }

    fn delete_property(&mut self, key: &str) {
        self.write_count += 1;
        self.properties.remove(key);
    }

    fn get_string_array(&self, key: &str) -> Vec<String> {
        match self.properties.get(key) {
            Some(StoredProperty::TextArray(values)) => values.clone(),
            _ => Vec::new(),
        }
    }

    fn set_string_array(&mut self, key: &str, values: &[String]) {
        self.write_count += 1;
        self.properties
            .insert(key.to_string(), StoredProperty::TextArray(values.to_vec()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_and_array_properties_are_typed() {
        let mut store = MemoryStore::new();
        store.set_string("clip", "a;0;1;");
        store.set_string_array("index", &["clip".to_string()]);

        assert_eq!(store.get_string("clip").as_deref(), Some("a;0;1;"));
        assert!(store.get_string("index").is_none());
        assert_eq!(store.get_string_array("index"), vec!["clip".to_string()]);
        assert!(store.get_string_array("clip").is_empty());
        assert!(store.get_string_array("missing").is_empty());
    }

    #[test]
    fn writes_are_counted() {
        let mut store = MemoryStore::new();
        assert_eq!(store.write_count(), 0);
        store.set_string("a", "1");
        store.delete_property("a");
        store.delete_property("never-existed");
        assert_eq!(store.write_count(), 3);
        assert!(store.is_empty());
        store.reset_write_count();
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn equality_ignores_write_count() {
        let mut a = MemoryStore::new();
        a.set_string("k", "old");
        a.set_string("k", "new");
        let mut b = MemoryStore::new();
        b.set_string("k", "new");
        assert_ne!(a.write_count(), b.write_count());
        assert_eq!(a, b);

        b.delete_property("k");
        assert_ne!(a, b);
    }

    #[test]
    fn snapshot_is_plain_json_object() {
        let json = r#"{ "index": ["k"], "k": "Walk;0;160;" }"#;
        let store: MemoryStore = serde_json::from_str(json).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get_string("k").as_deref(), Some("Walk;0;160;"));
        assert_eq!(store.write_count(), 0);

        let back = serde_json::to_value(&store).unwrap();
        assert_eq!(back["index"][0], "k");
    }
}
