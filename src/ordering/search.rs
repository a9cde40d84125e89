//! Binary search for an insertion point.

use std::cmp::Ordering;

use crate::iteration::Collection;
use crate::value::Value;

/// Returns the index at which `target` would be inserted to keep `sorted` ascending.
///
/// ```rust
/// use gather::array;
/// use gather::ordering::sorted_index;
/// use gather::value::Value;
///
/// assert_eq!(sorted_index(&array![10, 20, 30, 40, 50], &Value::from(35)), 3);
/// assert_eq!(sorted_index(&array![10, 20, 30], &Value::from(20)), 1);
/// ```
pub fn sorted_index(sorted: &Value, target: &Value) -> usize {
    sorted_index_by(sorted, target, Value::clone)
}

/// Returns the leftmost insertion index of `target` in `sorted` ordered by `key`.
///
/// The result `i` satisfies `key(sorted[i - 1]) < key(target) <= key(sorted[i])`
/// when `sorted` is ascending by `key`. Holes are searched as `Undefined`;
/// input that is not sequence-shaped gives `0`.
///
/// ```rust
/// use gather::ordering::sorted_index_by;
/// use gather::value::Value;
/// use gather::{array, object};
///
/// let people = array![object! { "age" => 20 }, object! { "age" => 40 }];
/// let index = sorted_index_by(&people, &object! { "age" => 30 }, |person| {
///     person.property("age").unwrap_or_default()
/// });
/// assert_eq!(index, 1);
/// ```
pub fn sorted_index_by<F, R>(sorted: &Value, target: &Value, mut key: F) -> usize
where
    F: FnMut(&Value) -> R,
    R: Into<Value>,
{
    let classified = Collection::classify(sorted);
    let Some(items) = classified.as_sequence() else {
        return 0;
    };
    let wanted = key(target).into();
    let mut low = 0;
    let mut high = items.len();
    while low < high {
        let middle = low + (high - low) / 2;
        let probe = key(items.get(middle).unwrap_or(&Value::Undefined)).into();
        if probe.loose_cmp(&wanted) == Some(Ordering::Less) {
            low = middle + 1;
        } else {
            high = middle;
        }
    }
    low
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Sequence;
    use crate::array;
    use rstest::rstest;

    #[rstest]
    #[case(array![], 5, 0)]
    #[case(array![10, 20, 30, 40, 50], 35, 3)]
    #[case(array![10, 20, 30, 40, 50], 5, 0)]
    #[case(array![10, 20, 30, 40, 50], 60, 5)]
    #[case(array![10, 20, 20, 20, 50], 20, 1)]
    fn insertion_points(#[case] sorted: Value, #[case] target: i32, #[case] expected: usize) {
        assert_eq!(sorted_index(&sorted, &Value::from(target)), expected);
    }

    #[rstest]
    fn key_applies_to_both_sides() {
        let words = array!["a", "ccc", "dddd"];
        let index = sorted_index_by(&words, &Value::from("bb"), |word| {
            word.property("length").unwrap_or_default()
        });
        assert_eq!(index, 1);
    }

    #[rstest]
    fn strings_search_lexically() {
        assert_eq!(sorted_index(&Value::from("acd"), &Value::from("b")), 1);
    }

    #[rstest]
    fn holes_search_as_undefined() {
        let mut sparse = Sequence::from(vec![1, 2]);
        sparse.set_len(3);
        assert_eq!(sorted_index(&Value::Array(sparse), &Value::from(3)), 2);
    }

    #[rstest]
    fn mapping_input_gives_zero() {
        assert_eq!(sorted_index(&crate::object! { "a" => 1 }, &Value::from(2)), 0);
    }
}
