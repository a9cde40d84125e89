//! Type predicates and the identity function.
//!
//! Predicates classify a value by its intrinsic kind. A mapping that has a
//! `length` entry is not an array, and an argument list is sequence-shaped
//! but is not an array either.

use crate::value::Value;

/// Returns `true` if `value` is an array.
///
/// ```rust
/// use gather::predicate::is_array;
/// use gather::value::Value;
/// use gather::{array, object};
///
/// assert!(is_array(&array![1, 2]));
/// assert!(!is_array(&Value::arguments([1, 2])));
/// assert!(!is_array(&object! { "length" => 2 }));
/// ```
#[inline]
pub const fn is_array(value: &Value) -> bool {
    matches!(value, Value::Array(_))
}

/// Returns `true` if `value` is a function.
#[inline]
pub const fn is_function(value: &Value) -> bool {
    matches!(value, Value::Function(_))
}

/// Returns `true` if `value` is a string.
#[inline]
pub const fn is_string(value: &Value) -> bool {
    matches!(value, Value::String(_))
}

/// Returns `true` if `value` is an argument list.
#[inline]
pub const fn is_arguments(value: &Value) -> bool {
    matches!(value, Value::Arguments(_))
}

/// Returns `true` if `value` has nothing in it.
///
/// Arrays, argument lists and strings are empty when their length is zero;
/// objects are empty when they have no own keys. Every other value has no
/// own keys and is therefore empty.
///
/// ```rust
/// use gather::predicate::is_empty;
/// use gather::value::Value;
/// use gather::{array, object};
///
/// assert!(is_empty(&array![]));
/// assert!(is_empty(&object! {}));
/// assert!(is_empty(&Value::Null));
/// assert!(!is_empty(&Value::from("moe")));
/// ```
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Array(sequence) | Value::Arguments(sequence) => sequence.is_empty(),
        Value::String(text) => text.is_empty(),
        Value::Object(mapping) => mapping.is_empty(),
        Value::Undefined | Value::Null | Value::Bool(_) | Value::Number(_) | Value::Function(_) => true,
    }
}

/// Returns its argument unchanged. This is the default iteratee.
///
/// ```rust
/// use gather::predicate::identity;
///
/// assert_eq!(identity(42), 42);
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}
