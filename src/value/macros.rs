//! Literal construction macros for [`Value`](super::Value).

/// Builds a `Value::Array` from a list of expressions convertible into `Value`.
///
/// # Examples
///
/// ```rust
/// use gather::array;
/// use gather::value::Value;
///
/// let mixed = array![1, "two", 3.5, Value::Null];
/// assert_eq!(mixed.property("length"), Some(Value::from(4)));
///
/// let empty = array![];
/// assert_eq!(empty.to_string(), "");
/// ```
#[macro_export]
macro_rules! array {
    () => {
        $crate::value::Value::Array($crate::value::Sequence::new())
    };
    ($($element:expr),+ $(,)?) => {
        $crate::value::Value::Array(
            ::std::vec![$($crate::value::Value::from($element)),+]
                .into_iter()
                .collect(),
        )
    };
}

/// Builds a `Value::Object` from `key => value` pairs, keeping their order.
///
/// # Examples
///
/// ```rust
/// use gather::object;
/// use gather::value::Value;
///
/// let person = object! { "name" => "moe", "age" => 30 };
/// assert_eq!(person.property("age"), Some(Value::from(30)));
///
/// let empty = object! {};
/// assert!(empty.as_mapping().is_some_and(|mapping| mapping.is_empty()));
/// ```
#[macro_export]
macro_rules! object {
    () => {
        $crate::value::Value::Object($crate::value::Mapping::new())
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut mapping = $crate::value::Mapping::new();
        $(
            mapping.insert($key, $crate::value::Value::from($value));
        )+
        $crate::value::Value::Object(mapping)
    }};
}
