//! Classification of a value into the shape traversal works on.

use super::{Flow, Key};
use crate::instrument::trace_event;
use crate::value::{Sequence, Value};

/// A value classified for traversal.
///
/// Classification happens once per operation call and is decided by the
/// value's kind alone:
///
/// - `Undefined` and `Null` are [`Absent`](Self::Absent): nothing is visited.
/// - `Array` and `Arguments` are [`Sequence`](Self::Sequence): indices are
///   visited in increasing order and holes are skipped.
/// - `String` becomes [`Characters`](Self::Characters): it is decomposed
///   into a sequence of single-character strings, which is also what the
///   iteratee receives as its collection argument.
/// - `Object` is a [`Mapping`](Self::Mapping) over its own keys. Scalars
///   (numbers, booleans, functions) are mappings with no own keys.
///
/// # Examples
///
/// ```rust
/// use gather::iteration::Collection;
/// use gather::object;
/// use gather::value::Value;
///
/// assert!(Collection::classify(&Value::Null).is_absent());
/// assert_eq!(Collection::classify(&Value::from("abc")).sequence_len(), Some(3));
///
/// // A mapping that happens to have a `length` entry is still a mapping.
/// let boat = object! { "length" => 50 };
/// assert_eq!(Collection::classify(&boat).sequence_len(), None);
/// ```
#[derive(Debug, Clone)]
pub enum Collection<'a> {
    /// Null or undefined input.
    Absent,
    /// A sequence-shaped value with accurate length and indexed access.
    Sequence {
        /// The value handed to iteratees as the collection argument.
        source: &'a Value,
        /// The indexed slots.
        items: &'a Sequence,
    },
    /// A value enumerated by its own keys.
    Mapping {
        /// The value handed to iteratees as the collection argument.
        source: &'a Value,
        /// The own entries in enumeration order.
        entries: &'a [(String, Value)],
    },
    /// A string decomposed into an array of single characters.
    Characters(Value),
}

impl<'a> Collection<'a> {
    /// Classifies `value`.
    pub fn classify(value: &'a Value) -> Self {
        let classified = match value {
            Value::Undefined | Value::Null => Self::Absent,
            Value::String(text) => Self::Characters(Value::Array(text.chars().collect())),
            Value::Array(items) | Value::Arguments(items) => Self::Sequence {
                source: value,
                items,
            },
            Value::Object(mapping) => Self::Mapping {
                source: value,
                entries: mapping.entries(),
            },
            Value::Bool(_) | Value::Number(_) | Value::Function(_) => Self::Mapping {
                source: value,
                entries: &[],
            },
        };
        trace_event!(
            kind = value.kind_name(),
            shape = classified.shape_name(),
            "classified collection"
        );
        classified
    }

    /// Returns `true` for null or undefined input.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns the indexed slots of a sequence-shaped collection.
    pub const fn as_sequence(&self) -> Option<&Sequence> {
        match self {
            Self::Sequence { items, .. } => Some(items),
            Self::Characters(Value::Array(items)) => Some(items),
            _ => None,
        }
    }

    /// Returns the length of a sequence-shaped collection, holes included.
    pub fn sequence_len(&self) -> Option<usize> {
        self.as_sequence().map(Sequence::len)
    }

    /// Returns the name of the shape: `absent`, `sequence`, `mapping` or `characters`.
    pub const fn shape_name(&self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Sequence { .. } => "sequence",
            Self::Mapping { .. } => "mapping",
            Self::Characters(_) => "characters",
        }
    }

    /// Visits every item in traversal order until `visit` returns [`Flow::Break`].
    ///
    /// Returns `Flow::Break` if traversal was cut short.
    pub fn traverse<F>(&self, mut visit: F) -> Flow
    where
        F: FnMut(&Value, Key<'_>, &Value) -> Flow,
    {
        match self {
            Self::Absent => Flow::Continue,
            Self::Sequence { source, items } => traverse_sequence(source, items, &mut visit),
            Self::Characters(source) => match source {
                Value::Array(items) => traverse_sequence(source, items, &mut visit),
                _ => Flow::Continue,
            },
            Self::Mapping { source, entries } => {
                for (key, item) in *entries {
                    if visit(item, Key::Name(key), source).is_break() {
                        return Flow::Break;
                    }
                }
                Flow::Continue
            }
        }
    }
}

fn traverse_sequence<F>(source: &Value, items: &Sequence, visit: &mut F) -> Flow
where
    F: FnMut(&Value, Key<'_>, &Value) -> Flow,
{
    for (index, item) in items.iter() {
        if visit(item, Key::Index(index), source).is_break() {
            return Flow::Break;
        }
    }
    Flow::Continue
}
