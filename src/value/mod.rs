//! The dynamic value model shared by every collection operation.
//!
//! Collections in this crate are heterogeneous: a single call may see
//! sequences, mappings, strings or nothing at all, and iteratees may return
//! anything. [`Value`] is the one type all of them are expressed in.
//!
//! - [`Value`]: the dynamic value itself
//! - [`Sequence`]: ordered, integer-indexed slots that may contain holes
//! - [`Mapping`]: insertion-ordered string-keyed entries
//! - [`Function`]: a shared callable with receiver binding
//!
//! `Value` follows the conversions of the scripting languages these
//! toolkits come from: truthiness, numeric coercion, string rendering and
//! relational comparison all behave the way such callers expect.
//!
//! # Examples
//!
//! ```rust
//! use gather::value::Value;
//! use gather::{array, object};
//!
//! let people = array![
//!     object! { "name" => "moe", "age" => 30 },
//!     object! { "name" => "curly", "age" => 50 },
//! ];
//!
//! assert_eq!(people.property("length"), Some(Value::from(2)));
//! assert_eq!(array![1, 2, 3].to_string(), "1,2,3");
//! assert!(!Value::from("").is_truthy());
//! ```

mod function;
mod macros;
mod mapping;
mod methods;
mod sequence;

use std::borrow::Cow;
use std::cmp::Ordering;

pub use function::Function;
pub use mapping::Mapping;
pub use sequence::Sequence;

/// Reference-counted pointer used for shared, copy-on-write storage.
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

/// A dynamically typed value.
///
/// `Arguments` is a distinct kind from `Array`: both are sequence-shaped,
/// but only `Array` answers `true` to [`is_array`](crate::predicate::is_array).
/// An `Object` is never sequence-shaped, whatever entries it carries.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// The absent value.
    #[default]
    Undefined,
    /// The explicit empty value.
    Null,
    /// A boolean.
    Bool(bool),
    /// A double-precision number.
    Number(f64),
    /// A string of characters.
    String(String),
    /// An ordered, possibly sparse, sequence.
    Array(Sequence),
    /// An argument list: sequence-shaped, but not an array.
    Arguments(Sequence),
    /// A string-keyed mapping.
    Object(Mapping),
    /// A callable.
    Function(Function),
}

static_assertions::assert_not_impl_any!(Value: Send, Sync);

impl Value {
    /// Builds an argument list from the given items.
    pub fn arguments<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Self>,
    {
        Self::Arguments(items.into_iter().collect())
    }

    /// Returns the name of this value's kind.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Arguments(_) => "arguments",
            Self::Object(_) => "object",
            Self::Function(_) => "function",
        }
    }

    /// Returns `true` for `Undefined` and `Null`.
    #[inline]
    pub const fn is_nullish(&self) -> bool {
        matches!(self, Self::Undefined | Self::Null)
    }

    /// Returns the truthiness of the value.
    ///
    /// `Undefined`, `Null`, `false`, `0`, `NaN` and the empty string are
    /// falsy; everything else, including empty arrays and objects, is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => false,
            Self::Bool(flag) => *flag,
            Self::Number(number) => *number != 0.0 && !number.is_nan(),
            Self::String(text) => !text.is_empty(),
            Self::Array(_) | Self::Arguments(_) | Self::Object(_) | Self::Function(_) => true,
        }
    }

    /// Returns the number if this value is a `Number`.
    #[inline]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the string slice if this value is a `String`.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the sequence behind an `Array` or `Arguments` value.
    #[inline]
    pub const fn as_sequence(&self) -> Option<&Sequence> {
        match self {
            Self::Array(sequence) | Self::Arguments(sequence) => Some(sequence),
            _ => None,
        }
    }

    /// Returns the mapping behind an `Object` value.
    #[inline]
    pub const fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Object(mapping) => Some(mapping),
            _ => None,
        }
    }

    /// Returns the function behind a `Function` value.
    #[inline]
    pub const fn as_function(&self) -> Option<&Function> {
        match self {
            Self::Function(function) => Some(function),
            _ => None,
        }
    }

    /// Converts the value to a number.
    ///
    /// Strings are parsed after trimming (the empty string is `0`),
    /// booleans become `0`/`1`, `Null` is `0`, `Undefined` is `NaN`, and
    /// composite values go through their string rendering.
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Undefined | Self::Function(_) => f64::NAN,
            Self::Null => 0.0,
            Self::Bool(flag) => f64::from(u8::from(*flag)),
            Self::Number(number) => *number,
            Self::String(text) => parse_number(text),
            Self::Array(_) | Self::Arguments(_) | Self::Object(_) => parse_number(&self.to_string()),
        }
    }

    /// Looks up a property by name.
    ///
    /// Objects answer with their own entries. Arrays, argument lists and
    /// strings answer `length` and in-range numeric indices (holes answer
    /// nothing). Every other lookup is missing and returns `None`.
    pub fn property(&self, name: &str) -> Option<Self> {
        match self {
            Self::Object(mapping) => mapping.get(name).cloned(),
            Self::Array(sequence) | Self::Arguments(sequence) => {
                if name == "length" {
                    return Some(Self::from(sequence.len()));
                }
                parse_index(name).and_then(|index| sequence.get(index).cloned())
            }
            Self::String(text) => {
                if name == "length" {
                    return Some(Self::from(text.chars().count()));
                }
                parse_index(name)
                    .and_then(|index| text.chars().nth(index))
                    .map(Self::from)
            }
            _ => None,
        }
    }

    /// Compares two values the way relational operators do.
    ///
    /// Composite values are first rendered to strings. Two strings compare
    /// lexically; any other pair compares numerically, and a `NaN` on either
    /// side makes the values unordered (`None`).
    ///
    /// ```rust
    /// use std::cmp::Ordering;
    /// use gather::value::Value;
    ///
    /// assert_eq!(Value::from(2).loose_cmp(&Value::from("10")), Some(Ordering::Less));
    /// assert_eq!(Value::from("2").loose_cmp(&Value::from("10")), Some(Ordering::Greater));
    /// assert_eq!(Value::from("a").loose_cmp(&Value::from(1)), None);
    /// ```
    pub fn loose_cmp(&self, other: &Self) -> Option<Ordering> {
        let left = self.to_primitive();
        let right = other.to_primitive();
        match (left.as_ref(), right.as_ref()) {
            (Self::String(left), Self::String(right)) => Some(left.cmp(right)),
            (left, right) => left.to_number().partial_cmp(&right.to_number()),
        }
    }

    /// Compares two values the way the strict equality operator does.
    ///
    /// Scalars compare by value (`NaN` is unequal to itself). Arrays,
    /// argument lists, objects and functions are equal only when they are
    /// the same value, that is when they share storage.
    ///
    /// ```rust
    /// use gather::array;
    /// use gather::value::Value;
    ///
    /// let list = array![1];
    /// assert!(list.strict_eq(&list.clone()));
    /// assert!(!list.strict_eq(&array![1]));
    /// assert!(Value::from(2).strict_eq(&Value::from(2.0)));
    /// ```
    pub fn strict_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Array(left), Self::Array(right)) | (Self::Arguments(left), Self::Arguments(right)) => {
                left.ptr_eq(right)
            }
            (Self::Object(left), Self::Object(right)) => left.ptr_eq(right),
            (Self::Function(left), Self::Function(right)) => left.ptr_eq(right),
            _ => self == other,
        }
    }

    fn to_primitive(&self) -> Cow<'_, Self> {
        match self {
            Self::Array(_) | Self::Arguments(_) | Self::Object(_) | Self::Function(_) => {
                Cow::Owned(Self::String(self.to_string()))
            }
            _ => Cow::Borrowed(self),
        }
    }
}

fn parse_index(name: &str) -> Option<usize> {
    if name.is_empty() || (name.len() > 1 && name.starts_with('0')) {
        return None;
    }
    name.parse().ok()
}

fn parse_number(text: &str) -> f64 {
    let trimmed = text.trim();
    match trimmed {
        "" => 0.0,
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        _ if trimmed
            .chars()
            .all(|character| character.is_ascii_digit() || ".eE+-".contains(character)) =>
        {
            trimmed.parse().unwrap_or(f64::NAN)
        }
        _ => f64::NAN,
    }
}

fn format_number(number: f64, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    if number.is_nan() {
        formatter.write_str("NaN")
    } else if number.is_infinite() {
        formatter.write_str(if number > 0.0 { "Infinity" } else { "-Infinity" })
    } else if number == 0.0 {
        formatter.write_str("0")
    } else if number.abs() >= 1e21 || number.abs() < 1e-6 {
        let rendered = format!("{number:e}");
        match rendered.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                write!(formatter, "{mantissa}e+{exponent}")
            }
            _ => formatter.write_str(&rendered),
        }
    } else {
        write!(formatter, "{number}")
    }
}

pub(crate) fn join(sequence: &Sequence, separator: &str) -> String {
    let mut joined = String::new();
    for (position, slot) in sequence.slots().enumerate() {
        if position > 0 {
            joined.push_str(separator);
        }
        if let Some(value) = slot.filter(|value| !value.is_nullish()) {
            joined.push_str(&value.to_string());
        }
    }
    joined
}

impl std::fmt::Display for Value {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Undefined => formatter.write_str("undefined"),
            Self::Null => formatter.write_str("null"),
            Self::Bool(flag) => write!(formatter, "{flag}"),
            Self::Number(number) => format_number(*number, formatter),
            Self::String(text) => formatter.write_str(text),
            Self::Array(sequence) => formatter.write_str(&join(sequence, ",")),
            Self::Arguments(_) => formatter.write_str("[object Arguments]"),
            Self::Object(_) => formatter.write_str("[object Object]"),
            Self::Function(_) => formatter.write_str("function"),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

macro_rules! impl_from_lossless_number {
    ($($source:ty),*) => {
        $(
            impl From<$source> for Value {
                fn from(number: $source) -> Self {
                    Self::Number(f64::from(number))
                }
            }
        )*
    };
}

impl_from_lossless_number!(f32, i8, i16, i32, u8, u16, u32);

#[allow(clippy::cast_precision_loss)]
impl From<i64> for Value {
    fn from(number: i64) -> Self {
        Self::Number(number as f64)
    }
}

#[allow(clippy::cast_precision_loss)]
impl From<usize> for Value {
    fn from(number: usize) -> Self {
        Self::Number(number as f64)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::String(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::String(text)
    }
}

impl From<char> for Value {
    fn from(character: char) -> Self {
        Self::String(character.to_string())
    }
}

impl From<&Value> for Value {
    fn from(value: &Value) -> Self {
        value.clone()
    }
}

impl From<Sequence> for Value {
    fn from(sequence: Sequence) -> Self {
        Self::Array(sequence)
    }
}

impl From<Mapping> for Value {
    fn from(mapping: Mapping) -> Self {
        Self::Object(mapping)
    }
}

impl From<Function> for Value {
    fn from(function: Function) -> Self {
        Self::Function(function)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(elements: Vec<T>) -> Self {
        Self::Array(elements.into_iter().collect())
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Value {
    #[allow(clippy::cast_possible_truncation)]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Undefined | Self::Null => serializer.serialize_unit(),
            Self::Bool(flag) => serializer.serialize_bool(*flag),
            Self::Number(number) if is_safe_integer(*number) => serializer.serialize_i64(*number as i64),
            Self::Number(number) => serializer.serialize_f64(*number),
            Self::String(text) => serializer.serialize_str(text),
            Self::Array(sequence) | Self::Arguments(sequence) => sequence.serialize(serializer),
            Self::Object(mapping) => mapping.serialize(serializer),
            Self::Function(_) => Err(serde::ser::Error::custom(
                "a function cannot be serialized",
            )),
        }
    }
}

#[cfg(feature = "serde")]
fn is_safe_integer(number: f64) -> bool {
    number.fract() == 0.0 && number.abs() <= 9_007_199_254_740_991.0
}

#[cfg(feature = "serde")]
struct ValueVisitor;

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("any value")
    }

    fn visit_bool<E>(self, flag: bool) -> Result<Self::Value, E> {
        Ok(Value::Bool(flag))
    }

    fn visit_i64<E>(self, number: i64) -> Result<Self::Value, E> {
        Ok(Value::from(number))
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_u64<E>(self, number: u64) -> Result<Self::Value, E> {
        Ok(Value::Number(number as f64))
    }

    fn visit_f64<E>(self, number: f64) -> Result<Self::Value, E> {
        Ok(Value::Number(number))
    }

    fn visit_str<E>(self, text: &str) -> Result<Self::Value, E> {
        Ok(Value::from(text))
    }

    fn visit_string<E>(self, text: String) -> Result<Self::Value, E> {
        Ok(Value::String(text))
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E>(self) -> Result<Self::Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        serde::Deserialize::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut sequence = Sequence::new();
        while let Some(element) = access.next_element::<Value>()? {
            sequence.push(element);
        }
        Ok(Value::Array(sequence))
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut mapping = Mapping::new();
        while let Some((key, value)) = access.next_entry::<String, Value>()? {
            mapping.insert(key, value);
        }
        Ok(Value::Object(mapping))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{array, object};
    use rstest::rstest;

    #[rstest]
    #[case(Value::Undefined, false)]
    #[case(Value::Null, false)]
    #[case(Value::from(0), false)]
    #[case(Value::Number(f64::NAN), false)]
    #[case(Value::from(""), false)]
    #[case(Value::from(false), false)]
    #[case(Value::from("a string here mate"), true)]
    #[case(Value::from(-1), true)]
    #[case(array![], true)]
    #[case(object! {}, true)]
    fn truthiness(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(value.is_truthy(), expected);
    }

    #[rstest]
    #[case(Value::from(5), "5")]
    #[case(Value::from(2.32), "2.32")]
    #[case(Value::from(-0.0), "0")]
    #[case(Value::Number(f64::INFINITY), "Infinity")]
    #[case(Value::Number(f64::NEG_INFINITY), "-Infinity")]
    #[case(Value::Number(f64::NAN), "NaN")]
    #[case(Value::from(0.000_001), "0.000001")]
    #[case(Value::from(1e-7), "1e-7")]
    #[case(Value::from(-1.5e-7), "-1.5e-7")]
    #[case(Value::from(123_456_789_012_345_680_000.0), "123456789012345680000")]
    #[case(Value::from(1e21), "1e+21")]
    #[case(Value::from(-2.5e22), "-2.5e+22")]
    #[case(array![1, Value::Null, "x"], "1,,x")]
    #[case(object! { "a" => 1 }, "[object Object]")]
    #[case(Value::arguments([1, 2]), "[object Arguments]")]
    fn display(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[rstest]
    #[case(Value::from(" 42 "), 42.0)]
    #[case(Value::from(""), 0.0)]
    #[case(Value::Null, 0.0)]
    #[case(Value::from(true), 1.0)]
    #[case(array![7], 7.0)]
    #[case(array![], 0.0)]
    fn to_number(#[case] value: Value, #[case] expected: f64) {
        assert!((value.to_number() - expected).abs() < f64::EPSILON);
    }

    #[rstest]
    #[case(Value::from("inf"))]
    #[case(Value::from("nan"))]
    #[case(Value::Undefined)]
    #[case(object! {})]
    fn to_number_not_a_number(#[case] value: Value) {
        assert!(value.to_number().is_nan());
    }

    #[rstest]
    fn property_lookup_on_each_kind() {
        let person = object! { "name" => "moe" };
        assert_eq!(person.property("name"), Some(Value::from("moe")));
        assert_eq!(person.property("age"), None);
        assert_eq!(Value::from("three").property("length"), Some(Value::from(5)));
        assert_eq!(Value::from("three").property("1"), Some(Value::from("h")));
        assert_eq!(array![1, 2].property("length"), Some(Value::from(2)));
        assert_eq!(array![1, 2].property("01"), None);
        assert_eq!(Value::from(3).property("length"), None);
        assert_eq!(Value::Null.property("length"), None);
    }

    #[rstest]
    fn object_with_length_entry_is_not_a_sequence() {
        let boat = object! { "length" => 50 };
        assert!(boat.as_sequence().is_none());
        assert_eq!(boat.property("length"), Some(Value::from(50)));
    }

    #[rstest]
    fn loose_cmp_orders_numbers_and_strings() {
        assert_eq!(Value::from(1).loose_cmp(&Value::from(2)), Some(Ordering::Less));
        assert_eq!(Value::from("b").loose_cmp(&Value::from("a")), Some(Ordering::Greater));
        assert_eq!(Value::Null.loose_cmp(&Value::from(0)), Some(Ordering::Equal));
        assert_eq!(Value::Undefined.loose_cmp(&Value::from(0)), None);
    }

    #[rstest]
    fn strict_eq_compares_composites_by_identity() {
        let nested = array![1];
        let person = object! { "name" => "moe" };
        assert!(nested.strict_eq(&nested.clone()));
        assert!(!nested.strict_eq(&array![1]));
        assert!(person.strict_eq(&person.clone()));
        assert!(!person.strict_eq(&object! { "name" => "moe" }));
        assert!(!Value::arguments([1]).strict_eq(&array![1]));
        assert!(!Value::Number(f64::NAN).strict_eq(&Value::Number(f64::NAN)));
        assert!(Value::from("moe").strict_eq(&Value::from("moe")));
    }

    #[rstest]
    fn strict_equality() {
        assert_eq!(Value::from(3), Value::from(3.0));
        assert_ne!(Value::Number(f64::NAN), Value::Number(f64::NAN));
        assert_ne!(Value::from("3"), Value::from(3));
        assert_ne!(Value::Undefined, Value::Null);
        assert_eq!(array![1, 2], array![1, 2]);
    }
}
