//! Selection by predicate.

use crate::iteration::{Collection, Flow, Key};
use crate::value::Value;

/// Returns the items for which `predicate` is truthy, in visit order.
///
/// ```rust
/// use gather::array;
/// use gather::traversal::filter;
/// use gather::value::Value;
///
/// let evens = filter(&array![1, 2, 3, 4, 5, 6], |number, _, _| number.to_number() % 2.0 == 0.0);
/// assert_eq!(Value::from(evens), array![2, 4, 6]);
/// ```
pub fn filter<F, R>(collection: &Value, predicate: F) -> Vec<Value>
where
    F: FnMut(&Value, Key<'_>, &Value) -> R,
    R: Into<Value>,
{
    partition_into(collection, predicate, true)
}

/// Returns the items for which `predicate` is falsy, in visit order.
///
/// ```rust
/// use gather::array;
/// use gather::traversal::reject;
/// use gather::value::Value;
///
/// let odds = reject(&array![1, 2, 3, 4, 5, 6], |number, _, _| number.to_number() % 2.0 == 0.0);
/// assert_eq!(Value::from(odds), array![1, 3, 5]);
/// ```
pub fn reject<F, R>(collection: &Value, predicate: F) -> Vec<Value>
where
    F: FnMut(&Value, Key<'_>, &Value) -> R,
    R: Into<Value>,
{
    partition_into(collection, predicate, false)
}

fn partition_into<F, R>(collection: &Value, mut predicate: F, keep: bool) -> Vec<Value>
where
    F: FnMut(&Value, Key<'_>, &Value) -> R,
    R: Into<Value>,
{
    let mut results = Vec::new();
    Collection::classify(collection).traverse(|item, key, source| {
        if predicate(item, key, source).into().is_truthy() == keep {
            results.push(item.clone());
        }
        Flow::Continue
    });
    results
}
