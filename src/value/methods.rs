//! Method resolution by name, used by `invoke`.
//!
//! An object's own function entries win; otherwise the intrinsic methods of
//! the receiver's kind are consulted. Intrinsic methods never mutate the
//! receiver: `sort` and `reverse` return new arrays.

use std::cmp::Ordering;

use super::{Sequence, Value, join};
use crate::stable_sort::merge_sort;

impl Value {
    /// Calls the method called `name` with `self` as receiver.
    ///
    /// Returns `None` when nothing callable answers to `name`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gather::array;
    /// use gather::value::Value;
    ///
    /// let sorted = array![5, 1, 7].call_method("sort", &[]);
    /// assert_eq!(sorted, Some(array![1, 5, 7]));
    ///
    /// assert_eq!(Value::from(3).call_method("shout", &[]), None);
    /// ```
    pub fn call_method(&self, name: &str, arguments: &[Self]) -> Option<Self> {
        if let Some(Self::Function(function)) = self.as_mapping().and_then(|mapping| mapping.get(name)) {
            return Some(function.call(self, arguments));
        }
        match (self, name) {
            (Self::Array(sequence), "sort") => Some(Self::Array(sort(sequence, arguments.first()))),
            (Self::Array(sequence), "reverse") => Some(Self::Array(reverse(sequence))),
            (Self::Array(sequence), "join") => {
                let separator = match arguments.first() {
                    None | Some(Self::Undefined) => ",".to_owned(),
                    Some(separator) => separator.to_string(),
                };
                Some(Self::String(join(sequence, &separator)))
            }
            (Self::String(text), "toUpperCase") => Some(Self::String(text.to_uppercase())),
            (Self::String(text), "toLowerCase") => Some(Self::String(text.to_lowercase())),
            (Self::String(text), "trim") => Some(Self::from(text.trim())),
            (_, "toString") => Some(Self::String(self.to_string())),
            _ => None,
        }
    }
}

/// Sorts present values, then undefined values, then holes.
fn sort(sequence: &Sequence, comparator: Option<&Value>) -> Sequence {
    let (undefined, defined): (Vec<Value>, Vec<Value>) = sequence
        .values()
        .cloned()
        .partition(|value| matches!(value, Value::Undefined));
    let sorted = match comparator {
        Some(Value::Function(function)) => merge_sort(defined, &mut |left: &Value, right: &Value| {
            let verdict = function.call(&Value::Undefined, &[left.clone(), right.clone()]).to_number();
            verdict.partial_cmp(&0.0).unwrap_or(Ordering::Equal)
        }),
        _ => merge_sort(defined, &mut |left: &Value, right: &Value| {
            left.to_string().cmp(&right.to_string())
        }),
    };
    let mut result: Sequence = sorted.into_iter().chain(undefined).collect();
    result.set_len(sequence.len());
    result
}

fn reverse(sequence: &Sequence) -> Sequence {
    let last = sequence.len();
    let mut reversed = Sequence::with_len(last);
    for (index, value) in sequence.iter() {
        reversed.set(last - 1 - index, value.clone());
    }
    reversed
}
