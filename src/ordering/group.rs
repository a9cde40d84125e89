//! Partitioning into groups keyed by a criterion.

use smallvec::SmallVec;

use crate::iteration::{Collection, Flow, Key};
use crate::value::{Mapping, Sequence, Value};

/// A dotted property path such as `"o.a"`, parsed once per call.
///
/// # Examples
///
/// ```rust
/// use gather::ordering::PropertyPath;
/// use gather::object;
/// use gather::value::Value;
///
/// let path = PropertyPath::parse("o.a");
/// assert_eq!(path.resolve(&object! { "o" => object! { "a" => 12 } }), Value::from(12));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyPath<'a> {
    segments: SmallVec<[&'a str; 4]>,
}

impl<'a> PropertyPath<'a> {
    /// Splits `path` on `.` into segments.
    pub fn parse(path: &'a str) -> Self {
        Self {
            segments: path.split('.').collect(),
        }
    }

    /// Returns the segments in walk order.
    pub fn segments(&self) -> &[&'a str] {
        &self.segments
    }

    /// Walks the segments starting at `value`.
    ///
    /// On the first segment that does not resolve the walk stops and the
    /// deepest value reached so far is returned, which is `value` itself
    /// when the first segment is already missing.
    pub fn resolve(&self, value: &Value) -> Value {
        let mut current = value.clone();
        for segment in &self.segments {
            match current.property(segment) {
                Some(next) => current = next,
                None => break,
            }
        }
        current
    }
}

/// Groups the items of `collection` by the string form of `criterion`.
///
/// Each group holds its items in visit order, and groups appear in the
/// order their first item was visited.
///
/// ```rust
/// use gather::array;
/// use gather::ordering::group_by;
///
/// let parity = group_by(&array![1, 2, 3, 4, 5, 6], |number, _| number.to_number() % 2.0);
/// assert_eq!(parity.get("0"), Some(&array![2, 4, 6]));
/// assert_eq!(parity.get("1"), Some(&array![1, 3, 5]));
/// ```
pub fn group_by<F, R>(collection: &Value, mut criterion: F) -> Mapping
where
    F: FnMut(&Value, Key<'_>) -> R,
    R: Into<Value>,
{
    let mut groups = Mapping::new();
    Collection::classify(collection).traverse(|item, key, _| {
        let name = criterion(item, key).into().to_string();
        match groups.get_mut(&name) {
            Some(Value::Array(members)) => members.push(item.clone()),
            _ => {
                groups.insert(name, Value::Array(Sequence::from(vec![item.clone()])));
            }
        }
        Flow::Continue
    });
    groups
}

/// Groups the items of `collection` by the value at a dotted property `path`.
///
/// ```rust
/// use gather::ordering::group_by_path;
/// use gather::{array, object};
///
/// let words = array!["one", "two", "three", "four"];
/// let by_length = group_by_path(&words, "length");
/// assert_eq!(by_length.get("3"), Some(&array!["one", "two"]));
///
/// let nested = array![object! { "o" => object! { "a" => 12 } }, object! { "o" => object! { "a" => 5 } }];
/// let by_inner = group_by_path(&nested, "o.a");
/// assert!(by_inner.contains_key("12") && by_inner.contains_key("5"));
/// ```
pub fn group_by_path(collection: &Value, path: &str) -> Mapping {
    let path = PropertyPath::parse(path);
    group_by(collection, |item, _| path.resolve(item))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{array, object};
    use rstest::rstest;

    #[rstest]
    fn groups_keep_visit_order() {
        let list = array!["one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten"];
        let grouped = group_by_path(&list, "length");
        assert_eq!(grouped.get("3"), Some(&array!["one", "two", "six", "ten"]));
        assert_eq!(grouped.get("4"), Some(&array!["four", "five", "nine"]));
        assert_eq!(grouped.get("5"), Some(&array!["three", "seven", "eight"]));
        assert_eq!(grouped.keys().collect::<Vec<_>>(), vec!["3", "5", "4"]);
    }

    #[rstest]
    #[case("o.a", "12")]
    #[case("o.missing", "[object Object]")]
    #[case("missing.a", "[object Object]")]
    fn path_falls_back_to_the_deepest_resolved_value(#[case] path: &str, #[case] expected: &str) {
        let objects = array![object! { "o" => object! { "a" => 12 } }];
        let grouped = group_by_path(&objects, path);
        assert_eq!(grouped.keys().collect::<Vec<_>>(), vec![expected]);
    }

    #[rstest]
    fn missing_first_segment_keeps_the_item() {
        let path = PropertyPath::parse("missing.a");
        assert_eq!(path.resolve(&Value::from(7)), Value::from(7));
    }

    #[rstest]
    fn segments_split_on_dots() {
        assert_eq!(PropertyPath::parse("a.b.c").segments(), &["a", "b", "c"]);
    }

    #[rstest]
    fn group_keys_come_from_the_key_argument() {
        let grouped = group_by(&object! { "x" => 1, "y" => 2 }, |_, key| key.to_string());
        assert_eq!(grouped.get("y"), Some(&array![2]));
    }

    #[rstest]
    #[case(1e-7, "1e-7")]
    #[case(1e21, "1e+21")]
    #[case(0.5, "0.5")]
    fn extreme_numeric_keys_use_exponent_form(#[case] criterion: f64, #[case] expected: &str) {
        let grouped = group_by(&array![1], |_, _| criterion);
        assert_eq!(grouped.keys().collect::<Vec<_>>(), vec![expected]);
    }

    #[rstest]
    fn absent_input_is_empty() {
        assert!(group_by(&Value::Null, |item, _| item.clone()).is_empty());
    }
}
