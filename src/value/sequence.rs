//! Ordered, integer-indexed storage with support for holes.

use super::{ReferenceCounter, Value};

/// An ordered sequence of slots, each either holding a value or empty (a hole).
///
/// The length of a `Sequence` counts holes, so a sequence built by writing
/// index 9 of an empty sequence has length 10 with nine holes. Traversal
/// skips holes, while transforms such as `map` keep them in place.
///
/// Clones share their storage and copy it on the first write, so a clone is
/// always an independent sequence as far as callers can observe.
///
/// # Examples
///
/// ```rust
/// use gather::value::{Sequence, Value};
///
/// let mut sparse = Sequence::new();
/// sparse.set(0, Value::from("terminator"));
/// sparse.set(9, Value::from("alien"));
///
/// assert_eq!(sparse.len(), 10);
/// assert!(sparse.is_hole(5));
/// assert_eq!(sparse.get(9), Some(&Value::from("alien")));
/// ```
#[derive(Clone, Default, PartialEq)]
pub struct Sequence {
    slots: ReferenceCounter<Vec<Option<Value>>>,
}

impl Sequence {
    /// Creates an empty sequence.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sequence of `length` holes.
    pub fn with_len(length: usize) -> Self {
        Self {
            slots: ReferenceCounter::new(vec![None; length]),
        }
    }

    /// Returns the length of the sequence, holes included.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the sequence has length zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the value at `index`, or `None` for a hole or an out-of-range index.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Returns `true` if `index` is within the length but holds no value.
    #[inline]
    pub fn is_hole(&self, index: usize) -> bool {
        matches!(self.slots.get(index), Some(None))
    }

    /// Writes `value` at `index`, growing the sequence with holes when needed.
    pub fn set(&mut self, index: usize, value: Value) {
        let slots = ReferenceCounter::make_mut(&mut self.slots);
        if index >= slots.len() {
            slots.resize(index + 1, None);
        }
        slots[index] = Some(value);
    }

    /// Appends `value` after the last slot.
    pub fn push(&mut self, value: Value) {
        ReferenceCounter::make_mut(&mut self.slots).push(Some(value));
    }

    /// Sets the length, truncating or padding with holes.
    pub fn set_len(&mut self, length: usize) {
        ReferenceCounter::make_mut(&mut self.slots).resize(length, None);
    }

    /// Iterates over every slot in index order, yielding `None` for holes.
    pub fn slots(&self) -> impl Iterator<Item = Option<&Value>> {
        self.slots.iter().map(Option::as_ref)
    }

    /// Iterates over the present values with their indices, skipping holes.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Value)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|value| (index, value)))
    }

    /// Iterates over the present values, skipping holes.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.slots.iter().flatten()
    }

    /// Returns the present values in index order, dropping holes.
    pub fn to_vec(&self) -> Vec<Value> {
        self.values().cloned().collect()
    }

    /// Returns `true` if both sequences share the same storage.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        ReferenceCounter::ptr_eq(&self.slots, &other.slots)
    }
}

impl std::fmt::Debug for Sequence {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = formatter.debug_list();
        for slot in self.slots.iter() {
            match slot {
                Some(value) => list.entry(value),
                None => list.entry(&format_args!("<hole>")),
            };
        }
        list.finish()
    }
}

impl<T: Into<Value>> FromIterator<T> for Sequence {
    fn from_iter<I: IntoIterator<Item = T>>(iterable: I) -> Self {
        Self {
            slots: ReferenceCounter::new(
                iterable
                    .into_iter()
                    .map(|element| Some(element.into()))
                    .collect(),
            ),
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Sequence {
    fn from(elements: Vec<T>) -> Self {
        elements.into_iter().collect()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Sequence {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut sequence = serializer.serialize_seq(Some(self.len()))?;
        for slot in self.slots() {
            sequence.serialize_element(slot.unwrap_or(&Value::Undefined))?;
        }
        sequence.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Sequence {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match <Value as serde::Deserialize>::deserialize(deserializer)? {
            Value::Array(sequence) => Ok(sequence),
            other => Err(serde::de::Error::custom(format!(
                "expected a sequence, found {}",
                other.kind_name()
            ))),
        }
    }
}
