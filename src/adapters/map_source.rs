// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory map property source.
//!
//! This module provides `MapSource`, an immutable property source built once
//! from user-supplied key/value pairs. It is the construction path used by
//! registries configured programmatically and by tests.

use crate::ports::PropertySource;
use std::collections::HashMap;

/// A property source backed by an immutable in-memory map.
///
/// The map is populated at construction time and never changes afterwards.
///
/// # Examples
///
/// ```
/// use optcfg::adapters::MapSource;
/// use optcfg::ports::PropertySource;
///
/// let source = MapSource::from_pairs([("NAME", "V1"), ("FLAG", "true")]);
/// assert_eq!(source.get("NAME").as_deref(), Some("V1"));
/// assert!(source.get("OTHER").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct MapSource {
    values: HashMap<String, String>,
}

impl MapSource {
    /// Creates a source from a map of key/value pairs.
    pub fn new(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    /// Creates a source from an iterator of key/value pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use optcfg::adapters::MapSource;
    /// use optcfg::ports::PropertySource;
    ///
    /// let source = MapSource::from_pairs([("PORT", "42")]);
    /// assert!(source.contains("PORT"));
    /// ```
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Returns the number of entries in the source.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the source has no entries.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<HashMap<String, String>> for MapSource {
    fn from(values: HashMap<String, String>) -> Self {
        Self::new(values)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapSource {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

impl PropertySource for MapSource {
    fn name(&self) -> &str {
        "map"
    }

    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    fn keys(&self) -> Vec<String> {
        self.values.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_source_name() {
        assert_eq!(MapSource::default().name(), "map");
    }

    #[test]
    fn test_map_source_get() {
        let source = MapSource::from_pairs([("key", "value")]);
        assert_eq!(source.get("key").as_deref(), Some("value"));
        assert!(source.get("missing").is_none());
    }

    #[test]
    fn test_map_source_contains() {
        let source = MapSource::from_pairs([("key", "value")]);
        assert!(source.contains("key"));
        assert!(!source.contains("missing"));
    }

    #[test]
    fn test_map_source_keys() {
        let source = MapSource::from_pairs([("a", "1"), ("b", "2")]);
        let mut keys = source.keys();
        keys.sort();
        assert_eq!(keys, ["a", "b"]);
    }

    #[test]
    fn test_map_source_from_hashmap() {
        let mut values = HashMap::new();
        values.insert("key".to_string(), "value".to_string());
        let source = MapSource::from(values);
        assert_eq!(source.len(), 1);
    }

    #[test]
    fn test_map_source_from_iterator() {
        let source: MapSource = [("a", "1")].into_iter().collect();
        assert_eq!(source.get("a").as_deref(), Some("1"));
    }

    #[test]
    fn test_map_source_empty() {
        let source = MapSource::default();
        assert!(source.is_empty());
        assert_eq!(source.len(), 0);
    }

    #[test]
    fn test_map_source_empty_value() {
        let source = MapSource::from_pairs([("key", "")]);
        assert_eq!(source.get("key").as_deref(), Some(""));
        assert!(source.contains("key"));
    }
}
