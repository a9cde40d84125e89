//! Short-circuiting queries.

use crate::iteration::{Collection, Flow, Key};
use crate::value::Value;

/// Returns `true` if any item of `collection` is truthy.
///
/// ```rust
/// use gather::array;
/// use gather::traversal::any;
///
/// assert!(any(&array![false, false, true]));
/// assert!(!any(&array![]));
/// ```
pub fn any(collection: &Value) -> bool {
    any_by(collection, |item, _, _| item.is_truthy())
}

/// Returns `true` if `iteratee` is truthy for any item, stopping at the first one that is.
///
/// ```rust
/// use gather::array;
/// use gather::traversal::any_by;
///
/// assert!(any_by(&array![1, 10, 29], |number, _, _| number.to_number() % 2.0 == 0.0));
/// ```
pub fn any_by<F, R>(collection: &Value, mut iteratee: F) -> bool
where
    F: FnMut(&Value, Key<'_>, &Value) -> R,
    R: Into<Value>,
{
    Collection::classify(collection)
        .traverse(|item, key, source| {
            if iteratee(item, key, source).into().is_truthy() {
                Flow::Break
            } else {
                Flow::Continue
            }
        })
        .is_break()
}

/// Returns `true` if every item of `collection` is truthy; `true` for empty input.
pub fn every(collection: &Value) -> bool {
    every_by(collection, |item, _, _| item.is_truthy())
}

/// Returns `true` if `iteratee` is truthy for every item, stopping at the first one that is not.
///
/// ```rust
/// use gather::array;
/// use gather::traversal::every_by;
/// use gather::value::Value;
///
/// assert!(every_by(&array![], |_, _, _| false));
/// assert!(!every_by(&array![0, 11, 28], |number, _, _| number.to_number() % 2.0 == 0.0));
/// assert!(every_by(&Value::Null, |_, _, _| false));
/// ```
pub fn every_by<F, R>(collection: &Value, mut iteratee: F) -> bool
where
    F: FnMut(&Value, Key<'_>, &Value) -> R,
    R: Into<Value>,
{
    Collection::classify(collection)
        .traverse(|item, key, source| {
            if iteratee(item, key, source).into().is_truthy() {
                Flow::Continue
            } else {
                Flow::Break
            }
        })
        .is_continue()
}

/// Returns the first item for which `iteratee` is truthy, or `None`.
///
/// No item after the found one is visited.
///
/// ```rust
/// use gather::array;
/// use gather::traversal::find;
/// use gather::value::Value;
///
/// let found = find(&array![1, 2, 3], |number, _, _| number.to_number() * 2.0 == 4.0);
/// assert_eq!(found, Some(Value::from(2)));
/// ```
pub fn find<F, R>(collection: &Value, mut iteratee: F) -> Option<Value>
where
    F: FnMut(&Value, Key<'_>, &Value) -> R,
    R: Into<Value>,
{
    let mut found = None;
    any_by(collection, |item, key, source| {
        let matched = iteratee(item, key, source).into().is_truthy();
        if matched {
            found = Some(item.clone());
        }
        matched
    });
    found
}

/// Returns `true` if some item is strictly equal to `target`.
///
/// Equality is [`Value::strict_eq`]: arrays, objects and functions match
/// only the very same value, never a structurally equal copy.
///
/// ```rust
/// use gather::traversal::include;
/// use gather::value::Value;
/// use gather::{array, object};
///
/// assert!(include(&array![1, 2, 3], &Value::from(2)));
/// assert!(include(&object! { "moe" => 1, "larry" => 3, "curly" => 9 }, &Value::from(3)));
/// assert!(!include(&array![1, 2, 3], &Value::from("2")));
/// ```
pub fn include(collection: &Value, target: &Value) -> bool {
    let classified = Collection::classify(collection);
    match classified.as_sequence() {
        Some(items) => items.values().any(|item| item.strict_eq(target)),
        None => any_by(collection, |item, _, _| item.strict_eq(target)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Function;
    use crate::{array, object};
    use rstest::rstest;

    #[rstest]
    #[case(array![], false)]
    #[case(array![false, false, false], false)]
    #[case(array![false, false, true], true)]
    #[case(array![Value::Null, 0, "yes", false], true)]
    #[case(Value::Null, false)]
    fn any_with_identity(#[case] collection: Value, #[case] expected: bool) {
        assert_eq!(any(&collection), expected);
    }

    #[rstest]
    #[case(array![], true)]
    #[case(array![true, true, true], true)]
    #[case(array![true, false, true], false)]
    #[case(array![1, Value::Undefined], false)]
    fn every_with_identity(#[case] collection: Value, #[case] expected: bool) {
        assert_eq!(every(&collection), expected);
    }

    #[rstest]
    fn any_stops_on_a_mapping() {
        let mut visited = Vec::new();
        let found = any_by(&object! { "a" => 0, "b" => 1, "c" => 2 }, |item, key, _| {
            visited.push(key.to_string());
            item.clone()
        });
        assert!(found);
        assert_eq!(visited, vec!["a", "b"]);
    }

    #[rstest]
    fn any_coerces_non_boolean_results() {
        assert!(any_by(&array![1, 2], |_, _, _| "truthy"));
        assert!(!any_by(&array![1, 2], |_, _, _| 0));
    }

    #[rstest]
    fn find_never_visits_past_the_match() {
        let mut visited = 0;
        let found = find(&array![1, 2, 3], |number, _, _| {
            visited += 1;
            number.to_number() * 2.0 == 4.0
        });
        assert_eq!(found, Some(Value::from(2)));
        assert_eq!(visited, 2);
    }

    #[rstest]
    fn find_without_match_is_none() {
        assert_eq!(find(&array![1, 2, 3], |_, _, _| false), None);
    }

    #[rstest]
    fn every_binds_context() {
        let context = object! { "limit" => 10 };
        let below = Function::new(|receiver, arguments| {
            let limit = receiver.property("limit").unwrap_or_default();
            Value::from(arguments[0].to_number() < limit.to_number())
        });
        assert!(every_by(&array![1, 5, 9], below.iteratee(&context)));
        assert!(!every_by(&array![1, 50], below.iteratee(&context)));
    }

    #[rstest]
    #[case(Value::from("moe"), Value::from("o"), true)]
    #[case(Value::from("moe"), Value::from("x"), false)]
    #[case(Value::Null, Value::Null, false)]
    #[case(array![array![1]], array![1], false)]
    fn include_scans_every_shape(#[case] collection: Value, #[case] target: Value, #[case] expected: bool) {
        assert_eq!(include(&collection, &target), expected);
    }

    #[rstest]
    fn include_matches_composites_by_identity() {
        let inner = array![1];
        let moe = object! { "name" => "moe" };
        let collection = array![inner.clone(), moe.clone()];
        assert!(include(&collection, &inner));
        assert!(include(&collection, &moe));
        assert!(!include(&collection, &object! { "name" => "moe" }));
        assert!(include(&object! { "first" => moe.clone() }, &moe));
    }

    #[rstest]
    fn include_never_matches_nan() {
        assert!(!include(&array![f64::NAN], &Value::from(f64::NAN)));
    }
}
