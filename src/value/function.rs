//! Shared dynamic callables with receiver binding.

use super::{ReferenceCounter, Value};
use crate::iteration::Key;

type Body = dyn Fn(&Value, &[Value]) -> Value;

/// A callable value taking a receiver and a list of arguments.
///
/// The receiver plays the role of a bound `context`: [`Function::bind`]
/// fixes it (and optionally some leading arguments), and
/// [`Function::iteratee`] adapts the function into an iteratee usable by
/// every collection operation, calling it as `(item, key, collection)`
/// with the given context as receiver.
///
/// Two functions are equal only if they are the same function.
///
/// # Examples
///
/// ```rust
/// use gather::traversal::map;
/// use gather::value::{Function, Value};
/// use gather::{array, object};
///
/// let scale = Function::new(|receiver, arguments| {
///     let multiplier = receiver.property("multiplier").unwrap_or_default();
///     Value::from(arguments[0].to_number() * multiplier.to_number())
/// });
///
/// let context = object! { "multiplier" => 3 };
/// let tripled = map(&array![1, 2, 3], scale.iteratee(&context));
/// assert_eq!(Value::Array(tripled), array![3, 6, 9]);
/// ```
#[derive(Clone)]
pub struct Function {
    body: ReferenceCounter<Body>,
}

impl Function {
    /// Creates a function from a closure over `(receiver, arguments)`.
    pub fn new<F>(body: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> Value + 'static,
    {
        Self {
            body: ReferenceCounter::new(body),
        }
    }

    /// Calls the function with `receiver` bound as its context.
    #[inline]
    pub fn call(&self, receiver: &Value, arguments: &[Value]) -> Value {
        (self.body)(receiver, arguments)
    }

    /// Returns a function that always runs with `context` as receiver and
    /// `leading` prepended to its arguments.
    ///
    /// ```rust
    /// use gather::value::{Function, Value};
    ///
    /// let add = Function::new(|_, arguments| {
    ///     Value::from(arguments.iter().map(Value::to_number).sum::<f64>())
    /// });
    /// let add_ten = add.bind(Value::Null, vec![Value::from(10)]);
    /// assert_eq!(add_ten.call(&Value::Undefined, &[Value::from(5)]), Value::from(15));
    /// ```
    pub fn bind(&self, context: Value, leading: Vec<Value>) -> Self {
        let target = self.clone();
        Self::new(move |_, arguments| {
            let mut combined = leading.clone();
            combined.extend_from_slice(arguments);
            target.call(&context, &combined)
        })
    }

    /// Adapts the function into an `(item, key, collection)` iteratee bound to `context`.
    pub fn iteratee<'a>(
        &'a self,
        context: &'a Value,
    ) -> impl FnMut(&Value, Key<'_>, &Value) -> Value + 'a {
        move |item: &Value, key: Key<'_>, collection: &Value| {
            self.call(context, &[item.clone(), key.to_value(), collection.clone()])
        }
    }

    /// Adapts the function into a `(memo, item, key, collection)` reducer bound to `context`.
    pub fn reducer<'a>(
        &'a self,
        context: &'a Value,
    ) -> impl FnMut(Value, &Value, Key<'_>, &Value) -> Value + 'a {
        move |memo: Value, item: &Value, key: Key<'_>, collection: &Value| {
            self.call(
                context,
                &[memo, item.clone(), key.to_value(), collection.clone()],
            )
        }
    }

    /// Returns `true` if both handles refer to the same function.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        ReferenceCounter::ptr_eq(&self.body, &other.body)
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl std::fmt::Debug for Function {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("Function(..)")
    }
}
