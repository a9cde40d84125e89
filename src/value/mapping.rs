//! Insertion-ordered string-keyed storage.

use rustc_hash::FxHashMap;

use super::{ReferenceCounter, Value};

#[derive(Clone, Default)]
struct MappingStorage {
    entries: Vec<(String, Value)>,
    positions: FxHashMap<String, usize>,
}

/// An associative mapping from string keys to values.
///
/// Every key held by a `Mapping` is an own-enumerable key. Enumeration
/// follows insertion order; replacing the value of an existing key keeps
/// its position. Lookups go through an `FxHashMap` index.
///
/// Like [`Sequence`](super::Sequence), clones share storage until the
/// first write.
///
/// # Examples
///
/// ```rust
/// use gather::value::{Mapping, Value};
///
/// let mut mapping = Mapping::new();
/// mapping.insert("one", Value::from(1));
/// mapping.insert("two", Value::from(2));
///
/// let keys: Vec<&str> = mapping.keys().collect();
/// assert_eq!(keys, vec!["one", "two"]);
/// assert_eq!(mapping.get("two"), Some(&Value::from(2)));
/// ```
#[derive(Clone, Default)]
pub struct Mapping {
    storage: ReferenceCounter<MappingStorage>,
}

impl Mapping {
    /// Creates an empty mapping.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of own keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.entries.len()
    }

    /// Returns `true` if the mapping has no own keys.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.entries.is_empty()
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.storage
            .positions
            .get(key)
            .map(|&position| &self.storage.entries[position].1)
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        let storage = ReferenceCounter::make_mut(&mut self.storage);
        let position = *storage.positions.get(key)?;
        Some(&mut storage.entries[position].1)
    }

    /// Returns `true` if `key` is an own key of the mapping.
    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.storage.positions.contains_key(key)
    }

    /// Inserts `value` under `key`, returning the previous value if any.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        let key = key.into();
        let storage = ReferenceCounter::make_mut(&mut self.storage);
        if let Some(&position) = storage.positions.get(&key) {
            return Some(std::mem::replace(&mut storage.entries[position].1, value));
        }
        storage.positions.insert(key.clone(), storage.entries.len());
        storage.entries.push((key, value));
        None
    }

    /// Returns the entries in enumeration order.
    #[inline]
    pub fn entries(&self) -> &[(String, Value)] {
        &self.storage.entries
    }

    /// Iterates over `(key, value)` pairs in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.storage
            .entries
            .iter()
            .map(|(key, value)| (key.as_str(), value))
    }

    /// Iterates over the keys in enumeration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(key, _)| key)
    }

    /// Iterates over the values in enumeration order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.iter().map(|(_, value)| value)
    }

    /// Returns `true` if both mappings share the same storage.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        ReferenceCounter::ptr_eq(&self.storage, &other.storage)
    }
}

impl PartialEq for Mapping {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key).is_some_and(|found| found == value))
    }
}

impl std::fmt::Debug for Mapping {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iterable: I) -> Self {
        let mut mapping = Self::new();
        for (key, value) in iterable {
            mapping.insert(key, value.into());
        }
        mapping
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Mapping {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Mapping {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match <Value as serde::Deserialize>::deserialize(deserializer)? {
            Value::Object(mapping) => Ok(mapping),
            other => Err(serde::de::Error::custom(format!(
                "expected a mapping, found {}",
                other.kind_name()
            ))),
        }
    }
}
