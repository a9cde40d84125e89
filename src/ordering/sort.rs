//! Stable sort by a computed criterion.

use std::cmp::Ordering;

use crate::iteration::{Collection, Flow, Key};
use crate::stable_sort::merge_sort;
use crate::value::Value;

/// An item paired with its criterion and its visit position.
#[derive(Debug)]
struct Decorated {
    value: Value,
    criteria: Value,
    position: usize,
}

impl Decorated {
    fn compare(&self, other: &Self) -> Ordering {
        let by_criteria = match self.criteria.loose_cmp(&other.criteria) {
            Some(Ordering::Less) => Ordering::Less,
            Some(Ordering::Greater) => Ordering::Greater,
            Some(Ordering::Equal) | None => Ordering::Equal,
        };
        by_criteria.then(self.position.cmp(&other.position))
    }
}

/// Returns the items of `collection` sorted ascending by `criterion`.
///
/// Criteria are compared like relational operators; pairs that do not
/// compare (`NaN`, a number against a non-numeric string) count as equal.
/// Items with equal criteria keep their visit order.
///
/// # Examples
///
/// ```rust
/// use gather::ordering::sort_by;
/// use gather::traversal::pluck;
/// use gather::value::Value;
/// use gather::{array, object};
///
/// let people = array![
///     object! { "name" => "curly", "age" => 50 },
///     object! { "name" => "moe", "age" => 30 },
/// ];
/// let sorted = Value::from(sort_by(&people, |person, _, _| person.property("age").unwrap_or_default()));
/// assert_eq!(Value::Array(pluck(&sorted, "name")), array!["moe", "curly"]);
/// ```
pub fn sort_by<F, R>(collection: &Value, mut criterion: F) -> Vec<Value>
where
    F: FnMut(&Value, Key<'_>, &Value) -> R,
    R: Into<Value>,
{
    let mut decorated = Vec::new();
    Collection::classify(collection).traverse(|item, key, source| {
        decorated.push(Decorated {
            value: item.clone(),
            criteria: criterion(item, key, source).into(),
            position: decorated.len(),
        });
        Flow::Continue
    });
    merge_sort(decorated, &mut Decorated::compare)
        .into_iter()
        .map(|decorated| decorated.value)
        .collect()
}
