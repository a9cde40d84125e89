//! Maximum and minimum.
//!
//! With a criterion the two are deliberately asymmetric on ties: `max_by`
//! replaces its running item on `>=`, so the last tied item wins, while
//! `min_by` replaces on `<`, so the first tied item wins.

use std::cmp::Ordering;

use crate::iteration::{Collection, Flow, Key};
use crate::predicate::is_empty;
use crate::value::Value;

/// Returns the largest item of `collection`.
///
/// An array is reduced numerically, so a non-numeric item or a hole makes
/// the result `NaN`. Empty input gives negative infinity. Any other
/// collection is compared item by item as in [`max_by`].
///
/// ```rust
/// use gather::aggregate::max;
/// use gather::array;
/// use gather::value::Value;
///
/// assert_eq!(max(&array![1, 3, 2]), Value::from(3));
/// assert_eq!(max(&array![]), Value::from(f64::NEG_INFINITY));
/// ```
pub fn max(collection: &Value) -> Value {
    if let Value::Array(items) = collection {
        return Value::from(numeric_fold(items.slots(), f64::NEG_INFINITY, f64::max));
    }
    if is_empty(collection) {
        return Value::from(f64::NEG_INFINITY);
    }
    max_by(collection, |item, _, _| item.clone())
}

/// Returns the item with the largest `criterion`; the last of several tied items wins.
///
/// Returns `Undefined` when no criterion compares at or above negative infinity.
///
/// ```rust
/// use gather::aggregate::max_by;
/// use gather::array;
/// use gather::value::Value;
///
/// assert_eq!(max_by(&array![3, 1, 2], |number, _, _| -number.to_number()), Value::from(1));
/// ```
pub fn max_by<F, R>(collection: &Value, criterion: F) -> Value
where
    F: FnMut(&Value, Key<'_>, &Value) -> R,
    R: Into<Value>,
{
    extremum(collection, criterion, f64::NEG_INFINITY, |ordering| {
        matches!(ordering, Some(Ordering::Greater | Ordering::Equal))
    })
}

/// Returns the smallest item of `collection`.
///
/// Mirrors [`max`]: empty input gives positive infinity.
///
/// ```rust
/// use gather::aggregate::min;
/// use gather::array;
/// use gather::value::Value;
///
/// assert_eq!(min(&array![10, 5, 100, 2, 1000]), Value::from(2));
/// assert_eq!(min(&array![]), Value::from(f64::INFINITY));
/// ```
pub fn min(collection: &Value) -> Value {
    if let Value::Array(items) = collection {
        return Value::from(numeric_fold(items.slots(), f64::INFINITY, f64::min));
    }
    if is_empty(collection) {
        return Value::from(f64::INFINITY);
    }
    min_by(collection, |item, _, _| item.clone())
}

/// Returns the item with the smallest `criterion`; the first of several tied items wins.
pub fn min_by<F, R>(collection: &Value, criterion: F) -> Value
where
    F: FnMut(&Value, Key<'_>, &Value) -> R,
    R: Into<Value>,
{
    extremum(collection, criterion, f64::INFINITY, |ordering| {
        ordering == Some(Ordering::Less)
    })
}

fn numeric_fold<'a>(
    slots: impl Iterator<Item = Option<&'a Value>>,
    initial: f64,
    choose: fn(f64, f64) -> f64,
) -> f64 {
    let mut result = initial;
    for slot in slots {
        let number = slot.map_or(f64::NAN, Value::to_number);
        if number.is_nan() {
            return f64::NAN;
        }
        result = choose(result, number);
    }
    result
}

fn extremum<F, R>(
    collection: &Value,
    mut criterion: F,
    bound: f64,
    replaces: fn(Option<Ordering>) -> bool,
) -> Value
where
    F: FnMut(&Value, Key<'_>, &Value) -> R,
    R: Into<Value>,
{
    let mut best = Value::from(bound);
    let mut winner = Value::Undefined;
    Collection::classify(collection).traverse(|item, key, source| {
        let computed = criterion(item, key, source).into();
        if replaces(computed.loose_cmp(&best)) {
            best = computed;
            winner = item.clone();
        }
        Flow::Continue
    });
    winner
}
