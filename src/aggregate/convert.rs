//! Conversion of any collection into a fresh sequence.

use crate::traversal::map;
use crate::value::{Sequence, Value};

/// Returns the items of `collection` as a new sequence.
///
/// Falsy input gives an empty sequence. Arrays and argument lists are
/// copied slot for slot, holes included; every other collection yields
/// its [`values`]. The result never shares storage with the input.
///
/// ```rust
/// use gather::aggregate::to_array;
/// use gather::value::Value;
///
/// let arguments = Value::arguments([1, 2, 3]);
/// let copied = to_array(&arguments);
/// assert_eq!(Value::Array(copied.clone()), gather::array![1, 2, 3]);
/// assert!(!copied.ptr_eq(arguments.as_sequence().unwrap()));
/// ```
pub fn to_array(collection: &Value) -> Sequence {
    if collection.is_truthy() {
        values(collection)
    } else {
        Sequence::new()
    }
}

/// Returns the visited items of `collection` in visit order.
///
/// ```rust
/// use gather::aggregate::values;
/// use gather::value::Value;
/// use gather::{array, object};
///
/// let stooges = object! { "one" => 1, "two" => 2 };
/// assert_eq!(Value::Array(values(&stooges)), array![1, 2]);
/// ```
pub fn values(collection: &Value) -> Sequence {
    map(collection, |item, _, _| item.clone())
}

/// Returns the number of items in `collection`; holes of a sequence are counted.
///
/// ```rust
/// use gather::aggregate::size;
/// use gather::object;
///
/// assert_eq!(size(&object! { "one" => 1, "two" => 2, "three" => 3 }), 3);
/// ```
pub fn size(collection: &Value) -> usize {
    to_array(collection).len()
}

/// Returns the sorted names of the own entries of `collection` that are functions.
///
/// ```rust
/// use gather::aggregate::functions;
/// use gather::object;
/// use gather::value::{Function, Value};
///
/// let noop = Function::new(|_, _| Value::Undefined);
/// let methods = object! { "b" => noop.clone(), "a" => noop, "c" => 3 };
/// assert_eq!(functions(&methods), vec!["a", "b"]);
/// ```
pub fn functions(collection: &Value) -> Vec<String> {
    let mut names: Vec<String> = collection
        .as_mapping()
        .into_iter()
        .flat_map(|mapping| mapping.iter())
        .filter(|(_, value)| value.as_function().is_some())
        .map(|(name, _)| name.to_owned())
        .collect();
    names.sort_unstable();
    names
}
