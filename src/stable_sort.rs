//! Stable top-down merge sort over an arbitrary comparator.
//!
//! Comparators built from loose value comparison are not guaranteed to be
//! total orders (`NaN`, mixed kinds), so sorting only ever asks whether the
//! right element is strictly less than the left one, and keeps the left
//! element otherwise. Equal elements keep their input order.

use std::cmp::Ordering;

pub(crate) fn merge_sort<T, C>(mut items: Vec<T>, compare: &mut C) -> Vec<T>
where
    C: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items;
    }
    let right = items.split_off(items.len() / 2);
    let left = merge_sort(items, compare);
    let right = merge_sort(right, compare);
    merge(left, right, compare)
}

fn merge<T, C>(left: Vec<T>, right: Vec<T>, compare: &mut C) -> Vec<T>
where
    C: FnMut(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(left_head), Some(right_head)) => {
                compare(right_head, left_head) == Ordering::Less
            }
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        let next = if take_right { right.next() } else { left.next() };
        merged.extend(next);
    }
    merged
}
