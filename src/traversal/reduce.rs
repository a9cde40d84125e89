//! Left fold over a collection.

use crate::error::CollectionError;
use crate::instrument::debug_event;
use crate::iteration::{Collection, Flow, Key};
use crate::value::Value;

/// Folds `collection` into a single value with `iteratee(memo, item, key, collection)`.
///
/// With `Some(seed)` the seed is the starting memo, whatever it is
/// (`Null`, `Undefined` and falsy values included). With `None` the first
/// visited item becomes the memo and the iteratee starts at the second one.
///
/// # Errors
///
/// Returns [`CollectionError::EmptyReduction`] when `seed` is `None` and
/// nothing is visited.
///
/// # Examples
///
/// ```rust
/// use gather::array;
/// use gather::traversal::reduce;
/// use gather::value::Value;
///
/// let sum = reduce(
///     &array![1, 2, 3],
///     |memo, number, _, _| Value::from(memo.to_number() + number.to_number()),
///     Some(Value::from(0)),
/// );
/// assert_eq!(sum, Ok(Value::from(6)));
/// ```
pub fn reduce<F>(collection: &Value, mut iteratee: F, seed: Option<Value>) -> Result<Value, CollectionError>
where
    F: FnMut(Value, &Value, Key<'_>, &Value) -> Value,
{
    let mut memo = seed;
    Collection::classify(collection).traverse(|item, key, source| {
        memo = Some(match memo.take() {
            Some(accumulated) => iteratee(accumulated, item, key, source),
            None => item.clone(),
        });
        Flow::Continue
    });
    memo.ok_or_else(|| {
        debug_event!(kind = collection.kind_name(), "reduce of empty collection");
        CollectionError::EmptyReduction
    })
}
