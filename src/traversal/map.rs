//! Transforms producing one result per visited item.

use crate::error::CollectionError;
use crate::instrument::debug_event;
use crate::iteration::{Collection, Flow, Key};
use crate::value::{Function, Sequence, Value};

/// Returns the result of `iteratee(item, key, collection)` for every visited item.
///
/// For sequence-shaped input the result has the same length as the input
/// and every result sits at its item's index, so holes stay holes. For
/// mappings the results are in enumeration order. Absent input yields an
/// empty sequence without calling the iteratee.
///
/// # Examples
///
/// ```rust
/// use gather::array;
/// use gather::traversal::map;
/// use gather::value::Value;
///
/// let doubled = map(&array![1, 2, 3], |number, _, _| number.to_number() * 2.0);
/// assert_eq!(Value::Array(doubled), array![2, 4, 6]);
/// ```
pub fn map<F, R>(collection: &Value, mut iteratee: F) -> Sequence
where
    F: FnMut(&Value, Key<'_>, &Value) -> R,
    R: Into<Value>,
{
    let classified = Collection::classify(collection);
    let mut results = classified
        .sequence_len()
        .map_or_else(Sequence::new, Sequence::with_len);
    classified.traverse(|item, key, source| {
        let result = iteratee(item, key, source).into();
        match key {
            Key::Index(index) => results.set(index, result),
            Key::Name(_) => results.push(result),
        }
        Flow::Continue
    });
    results
}

/// Returns the value of property `name` of every item; missing properties are `Undefined`.
///
/// ```rust
/// use gather::traversal::pluck;
/// use gather::value::Value;
/// use gather::{array, object};
///
/// let people = array![object! { "name" => "moe" }, object! { "name" => "curly" }];
/// assert_eq!(Value::Array(pluck(&people, "name")), array!["moe", "curly"]);
/// ```
pub fn pluck(collection: &Value, name: &str) -> Sequence {
    map(collection, |item, _, _| item.property(name).unwrap_or_default())
}

/// What `invoke` calls on each item.
#[derive(Debug, Clone, Copy)]
pub enum Method<'a> {
    /// A method looked up by name on each item.
    Named(&'a str),
    /// A function applied with each item as its receiver.
    Callable(&'a Function),
}

impl<'a> From<&'a str> for Method<'a> {
    fn from(name: &'a str) -> Self {
        Self::Named(name)
    }
}

impl<'a> From<&'a Function> for Method<'a> {
    fn from(function: &'a Function) -> Self {
        Self::Callable(function)
    }
}

/// Calls `method` on every item with `arguments`, collecting the results like [`map`].
///
/// A [`Method::Named`] resolves through [`Value::call_method`]: the item's
/// own function entry first, then the intrinsic methods of its kind. A
/// [`Method::Callable`] is applied with the item as receiver.
///
/// # Errors
///
/// Returns [`CollectionError::InvalidIteratee`] for the first item on which
/// a named method does not resolve; no later item is visited.
///
/// # Examples
///
/// ```rust
/// use gather::array;
/// use gather::traversal::invoke;
/// use gather::value::Value;
///
/// let lists = array![array![5, 1, 7], array![3, 2, 1]];
/// let sorted = invoke(&lists, "sort", &[]).unwrap();
/// assert_eq!(Value::Array(sorted), array![array![1, 5, 7], array![1, 2, 3]]);
/// ```
pub fn invoke<'a>(
    collection: &Value,
    method: impl Into<Method<'a>>,
    arguments: &[Value],
) -> Result<Sequence, CollectionError> {
    let method = method.into();
    let mut failure = None;
    let classified = Collection::classify(collection);
    let mut results = classified
        .sequence_len()
        .map_or_else(Sequence::new, Sequence::with_len);
    classified.traverse(|item, key, _| {
        let result = match method {
            Method::Callable(function) => function.call(item, arguments),
            Method::Named(name) => match item.call_method(name, arguments) {
                Some(result) => result,
                None => {
                    failure = Some(CollectionError::invalid_iteratee(name, item.kind_name()));
                    return Flow::Break;
                }
            },
        };
        match key {
            Key::Index(index) => results.set(index, result),
            Key::Name(_) => results.push(result),
        }
        Flow::Continue
    });
    match failure {
        Some(error) => {
            debug_event!(%error, "invoke failed");
            Err(error)
        }
        None => Ok(results),
    }
}
