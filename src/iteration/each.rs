//! The `each` primitive and its control-flow types.

use std::ops::ControlFlow;

use super::Collection;
use crate::value::Value;

/// Signals whether traversal should go on after an iteratee call.
///
/// Returning `()` from an `each` iteratee is the same as returning
/// `Flow::Continue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Flow {
    /// Visit the next item.
    #[default]
    Continue,
    /// Stop now; no further item is visited.
    Break,
}

impl Flow {
    /// Returns `true` for `Flow::Break`.
    #[inline]
    pub const fn is_break(self) -> bool {
        matches!(self, Self::Break)
    }

    /// Returns `true` for `Flow::Continue`.
    #[inline]
    pub const fn is_continue(self) -> bool {
        matches!(self, Self::Continue)
    }
}

impl From<()> for Flow {
    fn from((): ()) -> Self {
        Self::Continue
    }
}

impl From<ControlFlow<()>> for Flow {
    fn from(flow: ControlFlow<()>) -> Self {
        match flow {
            ControlFlow::Continue(()) => Self::Continue,
            ControlFlow::Break(()) => Self::Break,
        }
    }
}

/// The position of an item: an index in a sequence or a key in a mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key<'a> {
    /// The index of an item in a sequence-shaped collection.
    Index(usize),
    /// The own key of an item in a mapping.
    Name(&'a str),
}

impl Key<'_> {
    /// Returns the index, if this is a sequence position.
    #[inline]
    pub const fn as_index(self) -> Option<usize> {
        match self {
            Self::Index(index) => Some(index),
            Self::Name(_) => None,
        }
    }

    /// Converts the key to a `Value`: a number for an index, a string for a name.
    pub fn to_value(self) -> Value {
        match self {
            Self::Index(index) => Value::from(index),
            Self::Name(name) => Value::from(name),
        }
    }
}

impl std::fmt::Display for Key<'_> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Index(index) => write!(formatter, "{index}"),
            Self::Name(name) => formatter.write_str(name),
        }
    }
}

/// Calls `iteratee(item, key, collection)` for every item of `collection`.
///
/// Null and undefined input visit nothing. Strings are decomposed into
/// single characters first. Sequence-shaped values are visited in
/// increasing index order with holes skipped; mappings are visited in
/// enumeration order of their own keys. Traversal stops as soon as the
/// iteratee returns [`Flow::Break`], on either branch.
///
/// The receiver of the iteratee is whatever the closure captures; a
/// dynamic [`Function`](crate::value::Function) is bound to a context with
/// [`Function::iteratee`](crate::value::Function::iteratee).
///
/// # Examples
///
/// ```rust
/// use gather::array;
/// use gather::iteration::{Flow, each};
///
/// let mut seen = Vec::new();
/// each(&array![1, 2, 3, 4], |item, _, _| {
///     seen.push(item.to_number());
///     if seen.len() == 2 { Flow::Break } else { Flow::Continue }
/// });
/// assert_eq!(seen, vec![1.0, 2.0]);
/// ```
pub fn each<F, R>(collection: &Value, mut iteratee: F)
where
    F: FnMut(&Value, Key<'_>, &Value) -> R,
    R: Into<Flow>,
{
    Collection::classify(collection).traverse(|item, key, source| iteratee(item, key, source).into());
}
